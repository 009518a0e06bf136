//! Aggregate statistics over graded frames.

use posegrade_pose_model::{FrameResult, JointTally, SequenceSummary, JOINT_NAMES};

use crate::scorer::is_out_of_range;

/// Summarize results produced from `mapping` against a model sequence of
/// `model_len` frames.
///
/// `clamped_frames` counts mapping entries that were outside the model
/// sequence; the results themselves carry no trace of clamping.
pub fn summarize(results: &[FrameResult], mapping: &[i64], model_len: usize) -> SequenceSummary {
    let frame_count = results.len();

    let mut max_total_error = 0.0_f64;
    let mut worst_frame = None;
    let mut sum = 0.0;
    for r in results {
        sum += r.total_error;
        if worst_frame.is_none() || r.total_error > max_total_error {
            max_total_error = r.total_error;
            worst_frame = Some(r.frame_index);
        }
    }

    let mean_total_error = if frame_count == 0 {
        0.0
    } else {
        sum / frame_count as f64
    };

    let bad_joint_counts = JOINT_NAMES
        .iter()
        .map(|name| JointTally {
            joint: name.to_string(),
            count: results
                .iter()
                .filter(|r| r.bad_joints.iter().any(|j| j.as_str() == *name))
                .count(),
        })
        .filter(|tally| tally.count > 0)
        .collect();

    SequenceSummary {
        frame_count,
        mean_total_error,
        max_total_error,
        worst_frame,
        frames_with_bad_joints: results.iter().filter(|r| !r.bad_joints.is_empty()).count(),
        bad_joint_counts,
        clamped_frames: mapping
            .iter()
            .filter(|&&raw| is_out_of_range(raw, model_len))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(frame_index: usize, total_error: f64, bad: &[&str]) -> FrameResult {
        FrameResult {
            frame_index,
            mapped_model_frame: 0,
            total_error,
            bad_joints: bad.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_results() {
        let summary = summarize(&[], &[], 1);
        assert_eq!(summary.frame_count, 0);
        assert_eq!(summary.mean_total_error, 0.0);
        assert_eq!(summary.worst_frame, None);
        assert!(summary.bad_joint_counts.is_empty());
    }

    #[test]
    fn test_statistics() {
        let results = vec![
            result(0, 1.0, &[]),
            result(1, 3.0, &["left_knee", "hip"]),
            result(2, 3.0, &["hip"]),
            result(3, 1.0, &[]),
        ];
        let summary = summarize(&results, &[0, 5, -1, 2], 3);

        assert_eq!(summary.frame_count, 4);
        assert!((summary.mean_total_error - 2.0).abs() < 1e-12);
        assert_eq!(summary.max_total_error, 3.0);
        assert_eq!(summary.worst_frame, Some(1));
        assert_eq!(summary.frames_with_bad_joints, 2);
        assert_eq!(summary.clamped_frames, 2);

        let tallies: Vec<(&str, usize)> = summary
            .bad_joint_counts
            .iter()
            .map(|t| (t.joint.as_str(), t.count))
            .collect();
        assert_eq!(tallies, vec![("hip", 2), ("left_knee", 1)]);
    }
}
