//! Error types shared across PoseGrade crates.

use std::path::PathBuf;

/// Top-level error type for PoseGrade operations.
#[derive(Debug, thiserror::Error)]
pub enum PosegradeError {
    #[error("Input error: {message}")]
    Input { message: String },

    #[error("Scoring error: {message}")]
    Scoring { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PosegradeError.
pub type PosegradeResult<T> = Result<T, PosegradeError>;

impl PosegradeError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input {
            message: msg.into(),
        }
    }

    pub fn scoring(msg: impl Into<String>) -> Self {
        Self::Scoring {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Map a path to `FileNotFound` when it does not exist.
    pub fn require_file(path: impl Into<PathBuf>) -> PosegradeResult<PathBuf> {
        let path = path.into();
        if path.is_file() {
            Ok(path)
        } else {
            Err(Self::FileNotFound { path })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_message() {
        let err = PosegradeError::scoring("model sequence is empty");
        assert_eq!(err.to_string(), "Scoring error: model sequence is empty");

        let err = PosegradeError::config("negative threshold");
        assert!(err.to_string().contains("negative threshold"));
    }

    #[test]
    fn test_require_file_reports_missing_path() {
        let missing = std::env::temp_dir().join("posegrade_definitely_missing.jsonl");
        let _ = std::fs::remove_file(&missing);

        match PosegradeError::require_file(&missing) {
            Err(PosegradeError::FileNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<Vec<i64>>("[1, 2").unwrap_err();
        let err: PosegradeError = parse.into();
        assert!(matches!(err, PosegradeError::Json(_)));
    }
}
