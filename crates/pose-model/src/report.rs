//! Grading results and the report document.

use serde::{Deserialize, Serialize};

use crate::grading::GradingConfig;

/// Current report schema version.
pub const REPORT_SCHEMA_VERSION: &str = "1.0";

/// Grading outcome for one user frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    /// Position of the user frame in the user sequence.
    pub frame_index: usize,

    /// Model frame actually compared against, after clamping.
    pub mapped_model_frame: usize,

    /// Sum of the per-joint Euclidean distances.
    pub total_error: f64,

    /// Names of joints over their threshold, in joint order.
    pub bad_joints: Vec<String>,
}

/// How often one joint was flagged across a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointTally {
    pub joint: String,
    pub count: usize,
}

/// Aggregate statistics over a graded sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SequenceSummary {
    pub frame_count: usize,

    /// Mean of `total_error` over all frames (0.0 for an empty sequence).
    pub mean_total_error: f64,

    pub max_total_error: f64,

    /// Frame with the highest `total_error`; earliest wins ties.
    pub worst_frame: Option<usize>,

    /// Frames with at least one bad joint.
    pub frames_with_bad_joints: usize,

    /// Per-joint flag counts in joint order. Joints never flagged are omitted.
    pub bad_joint_counts: Vec<JointTally>,

    /// Mapping entries that pointed outside the model sequence and were clamped.
    pub clamped_frames: usize,
}

/// Top-level grading report written by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    pub schema_version: String,

    /// Generation timestamp (RFC 3339).
    pub generated_at: String,

    pub user_frames: usize,
    pub model_frames: usize,

    /// Thresholds the results were graded with.
    pub config: GradingConfig,

    pub results: Vec<FrameResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SequenceSummary>,
}

impl GradeReport {
    /// Create a report stamped with the current time.
    pub fn new(
        user_frames: usize,
        model_frames: usize,
        config: GradingConfig,
        results: Vec<FrameResult>,
    ) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            user_frames,
            model_frames,
            config,
            results,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: SequenceSummary) -> Self {
        self.summary = Some(summary);
        self
    }
}
