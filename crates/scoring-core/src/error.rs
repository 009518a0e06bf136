//! Errors raised while scoring.

use posegrade_pose_model::{InvalidThreshold, ShapeError};

/// Structural problems that abort a scoring call.
///
/// Out-of-range mapping entries are not errors; they are clamped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("model sequence is empty")]
    EmptyModelSequence,

    #[error("mapping has {mapping} entries but the user sequence has {frames} frames")]
    MappingLengthMismatch { mapping: usize, frames: usize },

    #[error("malformed frame (user frame {frame_index}, model frame {model_frame}): {source}")]
    MalformedFrame {
        frame_index: usize,
        model_frame: usize,
        source: ShapeError,
    },

    #[error(transparent)]
    InvalidThreshold(#[from] InvalidThreshold),
}

impl ScoringError {
    /// User-frame index the error refers to, if any.
    pub fn frame_index(&self) -> Option<usize> {
        match self {
            Self::MalformedFrame { frame_index, .. } => Some(*frame_index),
            _ => None,
        }
    }
}
