//! Validate pose sequence and mapping files without grading.

use std::path::PathBuf;

use posegrade_common::PosegradeError;
use posegrade_pose_model::{load_mapping, load_sequence, validate_sequence, Frame};
use posegrade_scoring_core::scorer::is_out_of_range;

pub fn run(user: PathBuf, model: PathBuf, mapping: Option<PathBuf>) -> anyhow::Result<()> {
    PosegradeError::require_file(&user)?;
    PosegradeError::require_file(&model)?;

    println!("Validating user sequence: {}", user.display());
    let user_frames =
        load_sequence(&user).map_err(|e| anyhow::anyhow!("Failed to load user sequence: {e}"))?;
    println!("Validating model sequence: {}", model.display());
    let model_frames =
        load_sequence(&model).map_err(|e| anyhow::anyhow!("Failed to load model sequence: {e}"))?;

    println!("  User frames: {}", user_frames.len());
    println!("  Model frames: {}", model_frames.len());

    let mut errors = vec![];
    collect_shape_issues("User", &user_frames, &mut errors);
    collect_shape_issues("Model", &model_frames, &mut errors);

    if model_frames.is_empty() {
        errors.push("Model sequence has no frames".to_string());
    }

    let user_dims = sequence_dims(&user_frames);
    let model_dims = sequence_dims(&model_frames);
    if let (Some(u), Some(m)) = (user_dims, model_dims) {
        if u != m {
            errors.push(format!("User frames are {u}D but model frames are {m}D"));
        }
    }

    if let Some(path) = mapping {
        let entries =
            load_mapping(&path).map_err(|e| anyhow::anyhow!("Failed to load mapping: {e}"))?;
        println!("  Mapping entries: {}", entries.len());
        if entries.len() != user_frames.len() {
            errors.push(format!(
                "Mapping has {} entries but the user sequence has {} frames",
                entries.len(),
                user_frames.len()
            ));
        }
        let clamped = entries
            .iter()
            .filter(|&&raw| is_out_of_range(raw, model_frames.len()))
            .count();
        if clamped > 0 {
            println!("  Out-of-range mapping entries (will be clamped): {clamped}");
        }
    }

    if errors.is_empty() {
        println!("\nInputs are valid.");
        Ok(())
    } else {
        println!("\nValidation issues:");
        for error in &errors {
            println!("  - {error}");
        }
        anyhow::bail!("{} issue(s) found", errors.len())
    }
}

fn collect_shape_issues(label: &str, frames: &[Frame], errors: &mut Vec<String>) {
    for (index, problem) in validate_sequence(frames) {
        errors.push(format!("{label} frame {index}: {problem}"));
    }
}

/// Dimensionality of the first well-formed frame.
fn sequence_dims(frames: &[Frame]) -> Option<usize> {
    frames.iter().find_map(|f| f.validate().ok())
}
