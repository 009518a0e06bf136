//! PoseGrade Scoring Core
//!
//! Compares a performer's pose sequence against a reference sequence:
//! - **Frame scoring:** Per-joint Euclidean distance, summed error, and
//!   joints over threshold
//! - **Sequence evaluation:** Resolve each user frame's model frame through
//!   an alignment mapping, clamping out-of-range entries
//! - **Summary:** Aggregate statistics over graded results
//!
//! This crate is pure computation — no I/O.
//! All inputs are data; all outputs are data.

pub mod error;
pub mod scorer;
pub mod summary;

pub use error::ScoringError;
pub use scorer::{evaluate_sequence, score_frame, FrameScore, FrameScorer};
pub use summary::summarize;
