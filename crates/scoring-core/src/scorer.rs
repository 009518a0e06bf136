//! Per-frame pose scoring against a reference sequence.
//!
//! # Algorithm
//!
//! 1. **Resolve** each user frame's model frame through the mapping,
//!    saturating out-of-range entries to `[0, model_len - 1]`.
//! 2. **Distance** per joint: Euclidean distance between the user and model
//!    coordinates.
//! 3. **Aggregate**: `total_error` is the sum (not the mean) of the 13
//!    distances; a joint is bad when its distance is strictly greater than
//!    its threshold.

use std::collections::BTreeMap;

use posegrade_pose_model::{joint_name, Frame, FrameResult, GradingConfig, ShapeError, JOINT_COUNT};

use crate::error::ScoringError;

/// Score of a single user/model frame pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameScore {
    /// Sum of per-joint distances.
    pub total_error: f64,
    /// Joints over threshold, in joint order.
    pub bad_joints: Vec<String>,
}

impl FrameScore {
    /// Mean distance per joint.
    pub fn mean_joint_error(&self) -> f64 {
        self.total_error / JOINT_COUNT as f64
    }

    pub fn is_clean(&self) -> bool {
        self.bad_joints.is_empty()
    }
}

/// Grades pose sequences with a fixed threshold configuration.
#[derive(Debug, Clone, Default)]
pub struct FrameScorer {
    config: GradingConfig,
}

impl FrameScorer {
    /// Create a scorer with the given thresholds.
    pub fn new(config: GradingConfig) -> Self {
        Self { config }
    }

    /// Create a scorer with default thresholds (0.1 for every joint).
    pub fn with_defaults() -> Self {
        Self::new(GradingConfig::default())
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Score one user frame against one model frame.
    pub fn score_frame(&self, user: &Frame, model: &Frame) -> Result<FrameScore, ShapeError> {
        score_frame(
            user,
            model,
            &self.config.joint_thresholds,
            self.config.default_joint_threshold,
        )
    }

    /// Score every user frame against its mapped model frame.
    ///
    /// Fails before scoring anything when the model sequence is empty, the
    /// mapping length differs from the user sequence, or a threshold is
    /// invalid. A malformed frame aborts the call at that frame.
    pub fn evaluate_sequence(
        &self,
        user_sequence: &[Frame],
        model_sequence: &[Frame],
        mapping: &[i64],
    ) -> Result<Vec<FrameResult>, ScoringError> {
        if model_sequence.is_empty() {
            return Err(ScoringError::EmptyModelSequence);
        }
        if mapping.len() != user_sequence.len() {
            return Err(ScoringError::MappingLengthMismatch {
                mapping: mapping.len(),
                frames: user_sequence.len(),
            });
        }
        self.config.validate()?;

        tracing::debug!(
            user_frames = user_sequence.len(),
            model_frames = model_sequence.len(),
            "Evaluating sequence"
        );

        let model_len = model_sequence.len();
        let mut results = Vec::with_capacity(user_sequence.len());

        let pairs = user_sequence.iter().zip(mapping);
        for (frame_index, (user_frame, &raw_idx)) in pairs.enumerate() {
            let model_idx = resolve_model_index(raw_idx, model_len);
            if is_out_of_range(raw_idx, model_len) {
                tracing::debug!(
                    frame_index,
                    raw_index = raw_idx,
                    model_index = model_idx,
                    "Clamped mapping entry"
                );
            }

            let score = self
                .score_frame(user_frame, &model_sequence[model_idx])
                .map_err(|source| ScoringError::MalformedFrame {
                    frame_index,
                    model_frame: model_idx,
                    source,
                })?;

            results.push(FrameResult {
                frame_index,
                mapped_model_frame: model_idx,
                total_error: score.total_error,
                bad_joints: score.bad_joints,
            });
        }

        Ok(results)
    }
}

/// Score one user frame against one model frame.
///
/// `joint_thresholds` overrides `default_threshold` per joint index.
pub fn score_frame(
    user: &Frame,
    model: &Frame,
    joint_thresholds: &BTreeMap<usize, f64>,
    default_threshold: f64,
) -> Result<FrameScore, ShapeError> {
    user.check_comparable(model)?;

    let mut total_error = 0.0;
    let mut bad_joints = Vec::new();

    for (i, (u, m)) in user.joints().iter().zip(model.joints()).enumerate() {
        let dist = joint_distance(u, m);
        total_error += dist;

        let threshold = joint_thresholds
            .get(&i)
            .copied()
            .unwrap_or(default_threshold);
        if dist > threshold {
            bad_joints.push(joint_name(i).into_owned());
        }
    }

    Ok(FrameScore {
        total_error,
        bad_joints,
    })
}

/// Evaluate a sequence with the given thresholds. See [`FrameScorer::evaluate_sequence`].
pub fn evaluate_sequence(
    user_sequence: &[Frame],
    model_sequence: &[Frame],
    mapping: &[i64],
    config: &GradingConfig,
) -> Result<Vec<FrameResult>, ScoringError> {
    FrameScorer::new(config.clone()).evaluate_sequence(user_sequence, model_sequence, mapping)
}

/// Euclidean distance between two points of equal dimensionality.
pub fn joint_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Saturate a raw mapping entry into `[0, model_len - 1]`.
///
/// `model_len` must be non-zero.
pub fn resolve_model_index(raw: i64, model_len: usize) -> usize {
    let max_idx = model_len.saturating_sub(1);
    usize::try_from(raw).map_or(0, |idx| idx.min(max_idx))
}

/// Whether a raw mapping entry falls outside `[0, model_len - 1]`.
pub fn is_out_of_range(raw: i64, model_len: usize) -> bool {
    usize::try_from(raw).map_or(true, |idx| idx >= model_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_sequence(n: usize) -> Vec<Frame> {
        vec![Frame::zeros(2); n]
    }

    #[test]
    fn test_identical_frames_score_zero() {
        let scorer = FrameScorer::with_defaults();
        let frame = Frame::zeros(2).with_offset(4, &[0.3, -0.7]);
        let score = scorer.score_frame(&frame, &frame).unwrap();
        assert_eq!(score.total_error, 0.0);
        assert!(score.is_clean());
    }

    #[test]
    fn test_single_joint_displacement() {
        let scorer = FrameScorer::with_defaults();
        let user = Frame::zeros(2).with_offset(1, &[0.2, 0.0]);
        let score = scorer.score_frame(&user, &Frame::zeros(2)).unwrap();
        assert!((score.total_error - 0.2).abs() < 1e-9);
        assert_eq!(score.bad_joints, vec!["right_shoulder"]);
    }

    #[test]
    fn test_total_error_is_sum_not_mean() {
        let scorer = FrameScorer::with_defaults();
        let user = Frame::zeros(3)
            .with_offset(0, &[3.0, 4.0, 0.0])
            .with_offset(12, &[0.0, 0.0, 2.0]);
        let score = scorer.score_frame(&user, &Frame::zeros(3)).unwrap();
        assert!((score.total_error - 7.0).abs() < 1e-9);
        assert!((score.mean_joint_error() - 7.0 / 13.0).abs() < 1e-9);
        assert_eq!(score.bad_joints, vec!["hip", "left_ankle"]);
    }

    #[test]
    fn test_distance_equal_to_threshold_is_not_bad() {
        let config = GradingConfig::default().with_default_threshold(5.0);
        let scorer = FrameScorer::new(config);
        let user = Frame::zeros(2).with_offset(2, &[3.0, 4.0]);
        let score = scorer.score_frame(&user, &Frame::zeros(2)).unwrap();
        assert_eq!(score.total_error, 5.0);
        assert!(score.is_clean());
    }

    #[test]
    fn test_joint_override_takes_precedence() {
        let config = GradingConfig::default()
            .with_default_threshold(0.1)
            .with_joint_threshold(1, 1.0)
            .with_joint_threshold(5, 0.0);
        let user = Frame::zeros(2)
            .with_offset(1, &[0.5, 0.0])
            .with_offset(5, &[0.01, 0.0])
            .with_offset(6, &[0.2, 0.0]);
        let score = FrameScorer::new(config)
            .score_frame(&user, &Frame::zeros(2))
            .unwrap();
        assert_eq!(score.bad_joints, vec!["left_elbow", "left_wrist"]);
    }

    #[test]
    fn test_free_function_matches_scorer() {
        let mut thresholds = BTreeMap::new();
        thresholds.insert(3, 0.05);
        let user = Frame::zeros(2).with_offset(3, &[0.06, 0.0]);
        let score = score_frame(&user, &Frame::zeros(2), &thresholds, 1.0).unwrap();
        assert_eq!(score.bad_joints, vec!["right_wrist"]);
    }

    #[test]
    fn test_score_frame_rejects_malformed() {
        let scorer = FrameScorer::with_defaults();
        let short = Frame::new(vec![vec![0.0, 0.0]; 12]);
        assert!(matches!(
            scorer.score_frame(&short, &Frame::zeros(2)),
            Err(ShapeError::WrongJointCount { actual: 12, .. })
        ));
        assert!(matches!(
            scorer.score_frame(&Frame::zeros(2), &Frame::zeros(3)),
            Err(ShapeError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_resolve_model_index() {
        assert_eq!(resolve_model_index(1, 3), 1);
        assert_eq!(resolve_model_index(99, 3), 2);
        assert_eq!(resolve_model_index(-5, 3), 0);
        assert_eq!(resolve_model_index(i64::MAX, 1), 0);
        assert_eq!(resolve_model_index(i64::MIN, 4), 0);
    }

    #[test]
    fn test_is_out_of_range() {
        assert!(!is_out_of_range(0, 3));
        assert!(!is_out_of_range(2, 3));
        assert!(is_out_of_range(3, 3));
        assert!(is_out_of_range(-1, 3));
    }

    #[test]
    fn test_evaluate_clamps_mapping() {
        let scorer = FrameScorer::with_defaults();
        let results = scorer
            .evaluate_sequence(&zero_sequence(3), &zero_sequence(3), &[99, -5, 1])
            .unwrap();
        let mapped: Vec<usize> = results.iter().map(|r| r.mapped_model_frame).collect();
        assert_eq!(mapped, vec![2, 0, 1]);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.frame_index, i);
        }
    }

    #[test]
    fn test_evaluate_compares_against_mapped_frame() {
        let model = vec![
            Frame::zeros(2),
            Frame::zeros(2).with_offset(0, &[1.0, 0.0]),
        ];
        let user = vec![Frame::zeros(2), Frame::zeros(2)];
        let results = FrameScorer::with_defaults()
            .evaluate_sequence(&user, &model, &[1, 0])
            .unwrap();
        assert!((results[0].total_error - 1.0).abs() < 1e-9);
        assert_eq!(results[0].bad_joints, vec!["hip"]);
        assert_eq!(results[1].total_error, 0.0);
    }

    #[test]
    fn test_evaluate_empty_user_sequence() {
        let results = FrameScorer::with_defaults()
            .evaluate_sequence(&[], &zero_sequence(1), &[])
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_evaluate_rejects_empty_model_before_shape_checks() {
        let malformed = vec![Frame::default()];
        let err = FrameScorer::with_defaults()
            .evaluate_sequence(&malformed, &[], &[0])
            .unwrap_err();
        assert_eq!(err, ScoringError::EmptyModelSequence);
    }

    #[test]
    fn test_evaluate_rejects_mapping_length_mismatch() {
        let err = FrameScorer::with_defaults()
            .evaluate_sequence(&zero_sequence(3), &zero_sequence(3), &[0, 1])
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::MappingLengthMismatch {
                mapping: 2,
                frames: 3
            }
        );
    }

    #[test]
    fn test_evaluate_reports_malformed_frame_index() {
        let mut user = zero_sequence(4);
        user[2] = Frame::new(vec![vec![0.0, 0.0]; 10]);
        let err = FrameScorer::with_defaults()
            .evaluate_sequence(&user, &zero_sequence(2), &[0, 1, 7, 1])
            .unwrap_err();
        assert_eq!(err.frame_index(), Some(2));
        match err {
            ScoringError::MalformedFrame { model_frame, .. } => assert_eq!(model_frame, 1),
            other => panic!("expected MalformedFrame, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_rejects_negative_threshold() {
        let config = GradingConfig::default().with_joint_threshold(4, -1.0);
        let err = evaluate_sequence(&zero_sequence(1), &zero_sequence(1), &[0], &config)
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidThreshold(_)));
    }
}
