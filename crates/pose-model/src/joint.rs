//! The canonical 13-joint skeleton.
//!
//! Every frame lists its joints in this order: position `i` of any frame's
//! coordinate list always denotes `Joint::ALL[i]`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of joints in every frame.
pub const JOINT_COUNT: usize = 13;

/// Canonical joint names, indexed by joint position.
pub const JOINT_NAMES: [&str; JOINT_COUNT] = [
    "hip",
    "right_shoulder",
    "right_elbow",
    "right_wrist",
    "left_shoulder",
    "left_elbow",
    "left_wrist",
    "right_hip",
    "right_knee",
    "right_ankle",
    "left_hip",
    "left_knee",
    "left_ankle",
];

/// Anatomical landmark tracked per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Hip,
    RightShoulder,
    RightElbow,
    RightWrist,
    LeftShoulder,
    LeftElbow,
    LeftWrist,
    RightHip,
    RightKnee,
    RightAnkle,
    LeftHip,
    LeftKnee,
    LeftAnkle,
}

impl Joint {
    /// All joints in canonical order.
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Hip,
        Joint::RightShoulder,
        Joint::RightElbow,
        Joint::RightWrist,
        Joint::LeftShoulder,
        Joint::LeftElbow,
        Joint::LeftWrist,
        Joint::RightHip,
        Joint::RightKnee,
        Joint::RightAnkle,
        Joint::LeftHip,
        Joint::LeftKnee,
        Joint::LeftAnkle,
    ];

    /// Position of this joint within a frame.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        JOINT_NAMES[self.index()]
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown joint name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown joint name: {0}")]
pub struct UnknownJoint(pub String);

impl FromStr for Joint {
    type Err = UnknownJoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JOINT_NAMES
            .iter()
            .position(|name| *name == s)
            .and_then(Self::from_index)
            .ok_or_else(|| UnknownJoint(s.to_string()))
    }
}

/// Name for a joint position.
///
/// Indices past the 13-joint skeleton yield `unknown_<i>`. Frames are
/// validated to exactly 13 joints before scoring, so scoring never reaches
/// that branch; it exists for larger joint sets.
pub fn joint_name(index: usize) -> Cow<'static, str> {
    match JOINT_NAMES.get(index) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("unknown_{index}")),
    }
}
