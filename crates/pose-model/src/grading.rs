//! Per-joint distance thresholds used when grading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Threshold applied to joints without an explicit entry.
pub const DEFAULT_JOINT_THRESHOLD: f64 = 0.1;

/// Grading thresholds.
///
/// In JSON, `joint_thresholds` keys are stringified joint indices:
/// `{"joint_thresholds": {"3": 0.25}, "default_joint_threshold": 0.1}`.
/// Both fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Per-joint maximum allowed distance, keyed by joint index.
    #[serde(default)]
    pub joint_thresholds: BTreeMap<usize, f64>,

    /// Maximum allowed distance for joints not listed above.
    #[serde(default = "default_joint_threshold")]
    pub default_joint_threshold: f64,
}

fn default_joint_threshold() -> f64 {
    DEFAULT_JOINT_THRESHOLD
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            joint_thresholds: BTreeMap::new(),
            default_joint_threshold: DEFAULT_JOINT_THRESHOLD,
        }
    }
}

/// A threshold that is negative or NaN.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid threshold {value} for {}", describe(.joint))]
pub struct InvalidThreshold {
    /// Joint index, or `None` for the default threshold.
    pub joint: Option<usize>,
    pub value: f64,
}

fn describe(joint: &Option<usize>) -> String {
    match joint {
        Some(i) => format!("joint {i}"),
        None => "default_joint_threshold".to_string(),
    }
}

impl GradingConfig {
    pub fn with_default_threshold(mut self, threshold: f64) -> Self {
        self.default_joint_threshold = threshold;
        self
    }

    pub fn with_joint_threshold(mut self, joint: usize, threshold: f64) -> Self {
        self.joint_thresholds.insert(joint, threshold);
        self
    }

    /// Effective threshold for a joint index.
    pub fn threshold_for(&self, joint: usize) -> f64 {
        self.joint_thresholds
            .get(&joint)
            .copied()
            .unwrap_or(self.default_joint_threshold)
    }

    /// Reject negative or NaN thresholds. `+inf` is allowed and disables a joint.
    pub fn validate(&self) -> Result<(), InvalidThreshold> {
        let check = |joint: Option<usize>, value: f64| {
            if value.is_nan() || value < 0.0 {
                Err(InvalidThreshold { joint, value })
            } else {
                Ok(())
            }
        };

        check(None, self.default_joint_threshold)?;
        for (&joint, &value) in &self.joint_thresholds {
            check(Some(joint), value)?;
        }
        Ok(())
    }
}

/// Load a grading configuration file.
pub fn load_grading_config(path: impl AsRef<Path>) -> Result<GradingConfig, ModelError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ModelError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| ModelError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: GradingConfig = serde_json::from_str("{}").unwrap();
        assert!(config.joint_thresholds.is_empty());
        assert!((config.default_joint_threshold - 0.1).abs() < 1e-12);
        assert_eq!(config, GradingConfig::default());
    }

    #[test]
    fn test_string_keys_parse_as_joint_indices() {
        let config: GradingConfig = serde_json::from_str(
            r#"{"joint_thresholds": {"1": 0.3, "12": 0.05}, "default_joint_threshold": 0.2}"#,
        )
        .unwrap();
        assert!((config.threshold_for(1) - 0.3).abs() < 1e-12);
        assert!((config.threshold_for(12) - 0.05).abs() < 1e-12);
        assert!((config.threshold_for(4) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_builder_helpers() {
        let config = GradingConfig::default()
            .with_default_threshold(0.5)
            .with_joint_threshold(3, 1.5);
        assert!((config.threshold_for(3) - 1.5).abs() < 1e-12);
        assert!((config.threshold_for(0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert!(GradingConfig::default().validate().is_ok());
        assert!(GradingConfig::default()
            .with_joint_threshold(2, f64::INFINITY)
            .validate()
            .is_ok());

        let err = GradingConfig::default()
            .with_default_threshold(-0.1)
            .validate()
            .unwrap_err();
        assert_eq!(err.joint, None);
        assert!(err.to_string().contains("default_joint_threshold"));

        let err = GradingConfig::default()
            .with_joint_threshold(7, f64::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(err.joint, Some(7));
        assert!(err.to_string().contains("joint 7"));
    }
}
