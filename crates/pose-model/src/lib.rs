//! PoseGrade Pose Model
//!
//! Defines the core data contracts for pose grading:
//! - **Joints:** The fixed 13-landmark skeleton and its canonical order
//! - **Frames:** Per-frame joint coordinates (2D or 3D) and sequence codecs
//! - **Mapping:** User-frame to model-frame alignment indices
//! - **Grading:** Per-joint distance thresholds
//! - **Report:** Per-frame result records and the report document
//!
//! Coordinates are taken as-is; no normalization happens here.

pub mod error;
pub mod frame;
pub mod grading;
pub mod joint;
pub mod mapping;
pub mod report;

pub use error::*;
pub use frame::*;
pub use grading::*;
pub use joint::*;
pub use mapping::*;
pub use report::*;
