//! User-frame to model-frame alignment mapping.
//!
//! The mapping is produced upstream (e.g. by a time-warping aligner) and is
//! untrusted: entries may be negative or past the end of the model sequence.

use std::path::Path;

use crate::error::ModelError;

/// The identity mapping `0..frames`.
pub fn identity_mapping(frames: usize) -> Vec<i64> {
    (0..frames as i64).collect()
}

/// Parse a mapping from a JSON array of integers.
pub fn parse_mapping(json: &str) -> Result<Vec<i64>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a mapping file (JSON array of integers).
pub fn load_mapping(path: impl AsRef<Path>) -> Result<Vec<i64>, ModelError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ModelError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_mapping(&content).map_err(|e| ModelError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_parse() {
        assert_eq!(identity_mapping(3), vec![0, 1, 2]);
        assert_eq!(parse_mapping("[0, -5, 99]").unwrap(), vec![0, -5, 99]);
        assert!(parse_mapping("[0.5]").is_err());
    }
}
