//! Grade a user pose sequence against a reference sequence.

use std::path::PathBuf;

use posegrade_common::PosegradeError;
use posegrade_pose_model::{
    identity_mapping, load_grading_config, load_mapping, load_sequence, GradeReport,
    GradingConfig,
};
use posegrade_scoring_core::{summarize, FrameScorer};

pub struct GradeArgs {
    pub user: PathBuf,
    pub model: PathBuf,
    pub mapping: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub default_threshold: Option<f64>,
    pub output: Option<PathBuf>,
    pub summary: bool,
    pub pretty: bool,
}

pub fn run(args: GradeArgs) -> anyhow::Result<()> {
    PosegradeError::require_file(&args.user)?;
    PosegradeError::require_file(&args.model)?;

    let user = load_sequence(&args.user)
        .map_err(|e| PosegradeError::input(format!("Failed to load user sequence: {e}")))?;
    let model = load_sequence(&args.model)
        .map_err(|e| PosegradeError::input(format!("Failed to load model sequence: {e}")))?;

    let mut config = match &args.config {
        Some(path) => load_grading_config(path)
            .map_err(|e| PosegradeError::config(format!("Failed to load grading config: {e}")))?,
        None => GradingConfig::default(),
    };
    if let Some(threshold) = args.default_threshold {
        config.default_joint_threshold = threshold;
    }

    let mapping = match &args.mapping {
        Some(path) => {
            load_mapping(path).map_err(|e| PosegradeError::input(format!("Failed to load mapping: {e}")))?
        }
        None => {
            tracing::info!("No mapping given, using identity mapping");
            identity_mapping(user.len())
        }
    };

    tracing::info!(
        user_frames = user.len(),
        model_frames = model.len(),
        "Grading sequence"
    );

    let scorer = FrameScorer::new(config.clone());
    let results = scorer
        .evaluate_sequence(&user, &model, &mapping)
        .map_err(|e| PosegradeError::scoring(e.to_string()))?;

    let flagged = results.iter().filter(|r| !r.bad_joints.is_empty()).count();
    tracing::info!(frames = results.len(), flagged, "Grading complete");

    let mut report = GradeReport::new(user.len(), model.len(), config, results);
    if args.summary {
        let summary = summarize(&report.results, &mapping, model.len());
        report = report.with_summary(summary);
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&report).map_err(PosegradeError::from)?
    } else {
        serde_json::to_string(&report).map_err(PosegradeError::from)?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, json + "\n").map_err(PosegradeError::from)?;
            tracing::info!(path = %path.display(), "Wrote grade report");
        }
        None => println!("{json}"),
    }

    Ok(())
}
