//! Pose frames and sequence codecs.
//!
//! A frame serializes as a JSON array of joint coordinate arrays, e.g.
//! `[[0.5, 0.2], [0.4, 0.3], ...]`. Sequences are stored either as a JSON
//! array of frames or as JSONL with one frame per line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ShapeError};
use crate::joint::JOINT_COUNT;

/// One time-sample of a pose: joint coordinates in canonical joint order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame(Vec<Vec<f64>>);

impl Frame {
    /// Wrap raw joint coordinates. No shape checks happen here.
    pub fn new(joints: Vec<Vec<f64>>) -> Self {
        Self(joints)
    }

    /// Build a 2D frame from `(x, y)` points.
    pub fn from_points_2d(points: &[[f64; 2]]) -> Self {
        Self(points.iter().map(|p| p.to_vec()).collect())
    }

    /// Build a 3D frame from `(x, y, z)` points.
    pub fn from_points_3d(points: &[[f64; 3]]) -> Self {
        Self(points.iter().map(|p| p.to_vec()).collect())
    }

    /// A frame with every joint at the origin.
    pub fn zeros(dims: usize) -> Self {
        Self(vec![vec![0.0; dims]; JOINT_COUNT])
    }

    pub fn joints(&self) -> &[Vec<f64>] {
        &self.0
    }

    pub fn joint(&self, index: usize) -> Option<&[f64]> {
        self.0.get(index).map(Vec::as_slice)
    }

    pub fn joint_count(&self) -> usize {
        self.0.len()
    }

    /// Dimensionality of the first joint, if any.
    pub fn dims(&self) -> Option<usize> {
        self.0.first().map(Vec::len)
    }

    /// Return a copy with `offset` added to one joint.
    pub fn with_offset(&self, joint: usize, offset: &[f64]) -> Self {
        let mut joints = self.0.clone();
        if let Some(coords) = joints.get_mut(joint) {
            for (c, d) in coords.iter_mut().zip(offset) {
                *c += d;
            }
        }
        Self(joints)
    }

    /// Check the 13-joint contract and return the frame's dimensionality.
    pub fn validate(&self) -> Result<usize, ShapeError> {
        if self.0.len() != JOINT_COUNT {
            return Err(ShapeError::WrongJointCount {
                expected: JOINT_COUNT,
                actual: self.0.len(),
            });
        }

        let dims = self.0[0].len();
        if !(2..=3).contains(&dims) {
            return Err(ShapeError::UnsupportedDimension { joint: 0, dims });
        }

        for (joint, coords) in self.0.iter().enumerate().skip(1) {
            if coords.len() != dims {
                return Err(ShapeError::InconsistentDimension {
                    joint,
                    expected: dims,
                    actual: coords.len(),
                });
            }
        }

        Ok(dims)
    }

    /// Check that `self` (user) and `model` can be compared joint by joint.
    pub fn check_comparable(&self, model: &Frame) -> Result<(), ShapeError> {
        self.validate()?;
        model.validate()?;

        for (joint, (u, m)) in self.0.iter().zip(&model.0).enumerate() {
            if u.len() != m.len() {
                return Err(ShapeError::DimensionMismatch {
                    joint,
                    user: u.len(),
                    model: m.len(),
                });
            }
        }

        Ok(())
    }
}

impl From<Vec<Vec<f64>>> for Frame {
    fn from(joints: Vec<Vec<f64>>) -> Self {
        Self(joints)
    }
}

/// Check every frame of a sequence, collecting all problems.
pub fn validate_sequence(frames: &[Frame]) -> Vec<(usize, ShapeError)> {
    frames
        .iter()
        .enumerate()
        .filter_map(|(i, frame)| frame.validate().err().map(|e| (i, e)))
        .collect()
}

/// Parse frames from JSONL content (one JSON frame per line).
///
/// Blank lines and lines starting with `#` are skipped. Reported line
/// numbers are 1-based and count skipped lines.
pub fn parse_frames(jsonl: &str) -> Result<Vec<Frame>, ModelError> {
    jsonl
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, content)| {
            serde_json::from_str(content).map_err(|source| ModelError::ParseLine { line, source })
        })
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[Frame]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}

/// Load a pose sequence from disk.
///
/// `.jsonl` files are read line by line; anything else must hold a JSON
/// array of frames.
pub fn load_sequence(path: impl AsRef<Path>) -> Result<Vec<Frame>, ModelError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ModelError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_jsonl = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

    if is_jsonl {
        parse_frames(&content)
    } else {
        serde_json::from_str(&content).map_err(|e| ModelError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
