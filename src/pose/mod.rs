//! Pose data model - keypoints and per-frame poses
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod keypoint;

pub use frame::{Pose, FLAT_LEN};
pub use keypoint::{Keypoint, KeypointName, KEYPOINT_COUNT, VALUES_PER_KEYPOINT};
