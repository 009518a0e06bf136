//! Errors raised while reading or checking pose data.

use std::path::PathBuf;

/// Structural problem with a single frame or frame pair.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("expected {expected} joints, found {actual}")]
    WrongJointCount { expected: usize, actual: usize },

    #[error("joint {joint} has {dims} coordinates; only 2D or 3D points are supported")]
    UnsupportedDimension { joint: usize, dims: usize },

    #[error("joint {joint} has {actual} coordinates but joint 0 has {expected}")]
    InconsistentDimension {
        joint: usize,
        expected: usize,
        actual: usize,
    },

    #[error("joint {joint} is {user}D in the user frame but {model}D in the model frame")]
    DimensionMismatch {
        joint: usize,
        user: usize,
        model: usize,
    },
}

/// Errors that can occur when loading pose data files.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Parse error on line {line}: {source}")]
    ParseLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Invalid pose data: {message}")]
    ValidationError { message: String },
}
