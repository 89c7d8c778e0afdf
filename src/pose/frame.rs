//! Per-frame pose storage
//!
//! One `Pose` holds the full keypoint set detected in a single frame,
//! indexed by `KeypointName`. Poses are never mutated after construction;
//! the smoother builds a fresh `Pose` rather than editing its input.

use super::keypoint::{Keypoint, KeypointName, KEYPOINT_COUNT, VALUES_PER_KEYPOINT};

/// Expected length of the flat bridge array (13 keypoints x 3 values)
pub const FLAT_LEN: usize = KEYPOINT_COUNT * VALUES_PER_KEYPOINT;

/// All keypoints detected in one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    keypoints: [Keypoint; KEYPOINT_COUNT],
}

impl Pose {
    /// Build from a full keypoint array. Slots must be in `KeypointName`
    /// index order.
    pub fn new(keypoints: [Keypoint; KEYPOINT_COUNT]) -> Self {
        debug_assert!(keypoints
            .iter()
            .enumerate()
            .all(|(i, kp)| kp.part.index() == i));
        Self { keypoints }
    }

    /// Parse the flat `[x, y, score]` array handed across the JS bridge.
    /// Returns `None` when the length is wrong.
    pub fn from_flat(data: &[f32]) -> Option<Pose> {
        if data.len() != FLAT_LEN {
            return None;
        }

        let keypoints = std::array::from_fn(|i| {
            let base = i * VALUES_PER_KEYPOINT;
            Keypoint::new(
                KeypointName::ALL[i],
                data[base],
                data[base + 1],
                data[base + 2],
            )
        });

        Some(Pose::new(keypoints))
    }

    /// Look up one keypoint by name
    pub fn get(&self, part: KeypointName) -> &Keypoint {
        &self.keypoints[part.index()]
    }

    /// Pixel position of one keypoint
    pub fn point(&self, part: KeypointName) -> (f32, f32) {
        self.get(part).position()
    }

    /// Pixel position, filtered by the confidence floor
    pub fn point_if_confident(&self, part: KeypointName, floor: f32) -> Option<(f32, f32)> {
        let kp = self.get(part);
        if kp.score >= floor {
            Some(kp.position())
        } else {
            None
        }
    }

    /// Full keypoint set in index order
    pub fn keypoints(&self) -> &[Keypoint; KEYPOINT_COUNT] {
        &self.keypoints
    }
}
