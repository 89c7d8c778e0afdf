//! Exercise catalog - supported exercises and their rep thresholds
//!
//! Static, read-only table. Each entry pairs the angle bands that drive the
//! rep state machine with the keypoints a frame must supply and a tagged
//! variant describing how the controlling angle is derived. One generic
//! state-machine routine consumes this table; there is no per-exercise
//! detection code.

use crate::pose::{KeypointName, KeypointName::*, Pose};

use super::geometry::{angle_between, midpoint};

/// Pixel offset of the synthetic vertical reference above the hip midpoint
/// used for the crunch torso angle
const VERTICAL_REFERENCE_PX: f32 = 100.0;

/// Supported exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exercise {
    Pushup,
    Squat,
    Curl,
    Crunch,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Pushup,
        Exercise::Squat,
        Exercise::Curl,
        Exercise::Crunch,
    ];

    /// Parse a UI exercise id. `"dumbbellCurl"` is accepted as an
    /// alias for the curl.
    pub fn from_id(id: &str) -> Option<Exercise> {
        match id {
            "pushup" => Some(Exercise::Pushup),
            "squat" => Some(Exercise::Squat),
            "curl" | "dumbbellCurl" => Some(Exercise::Curl),
            "crunch" => Some(Exercise::Crunch),
            _ => None,
        }
    }

    /// Canonical id for persistence and the UI
    pub fn id(self) -> &'static str {
        match self {
            Exercise::Pushup => "pushup",
            Exercise::Squat => "squat",
            Exercise::Curl => "curl",
            Exercise::Crunch => "crunch",
        }
    }

    /// Catalog entry for this exercise
    pub fn definition(self) -> &'static ExerciseDefinition {
        &CATALOG[self as usize]
    }
}

/// How the controlling angle is derived from a pose
#[derive(Clone, Copy, Debug)]
pub enum AngleSource {
    /// Average of left/right shoulder-elbow-wrist angles
    ArmAverage,
    /// Average of left/right hip-knee-ankle angles
    KneeAverage,
    /// Torso lean: angle at the hip midpoint between a vertical reference
    /// point above it and the shoulder midpoint
    TorsoLean,
}

/// Static description of one supported exercise
pub struct ExerciseDefinition {
    pub exercise: Exercise,
    /// Controlling angle at the start position of a rep
    pub start_angle: f32,
    /// Controlling angle at the end position of a rep
    pub end_angle: f32,
    /// Allowed deviation from a target angle for a transition to trigger
    pub tolerance: f32,
    /// Keypoints a frame must supply at or above the confidence floor
    pub required: &'static [KeypointName],
    pub angle_source: AngleSource,
}

pub static CATALOG: [ExerciseDefinition; 4] = [
    ExerciseDefinition {
        exercise: Exercise::Pushup,
        start_angle: 170.0,
        end_angle: 90.0,
        tolerance: 15.0,
        required: &[
            LeftShoulder,
            RightShoulder,
            LeftElbow,
            RightElbow,
            LeftWrist,
            RightWrist,
        ],
        angle_source: AngleSource::ArmAverage,
    },
    ExerciseDefinition {
        exercise: Exercise::Squat,
        start_angle: 170.0,
        end_angle: 90.0,
        tolerance: 15.0,
        required: &[LeftHip, RightHip, LeftKnee, RightKnee, LeftAnkle, RightAnkle],
        angle_source: AngleSource::KneeAverage,
    },
    ExerciseDefinition {
        exercise: Exercise::Curl,
        start_angle: 160.0,
        end_angle: 55.0,
        tolerance: 20.0,
        required: &[
            LeftShoulder,
            RightShoulder,
            LeftElbow,
            RightElbow,
            LeftWrist,
            RightWrist,
        ],
        angle_source: AngleSource::ArmAverage,
    },
    ExerciseDefinition {
        exercise: Exercise::Crunch,
        start_angle: 90.0,
        end_angle: 55.0,
        tolerance: 12.0,
        required: &[LeftShoulder, RightShoulder, LeftHip, RightHip],
        angle_source: AngleSource::TorsoLean,
    },
];

impl ExerciseDefinition {
    /// All required keypoints present at or above the confidence floor?
    pub fn keypoints_visible(&self, pose: &Pose, floor: f32) -> bool {
        self.required
            .iter()
            .all(|&part| pose.get(part).score >= floor)
    }

    /// Controlling angle for this frame.
    ///
    /// Returns `None` when required keypoints are missing or the geometry is
    /// degenerate; the frame must then be skipped, never read as zero.
    pub fn controlling_angle(&self, pose: &Pose, floor: f32) -> Option<f32> {
        if !self.keypoints_visible(pose, floor) {
            return None;
        }

        match self.angle_source {
            AngleSource::ArmAverage => side_average(
                pose,
                [LeftShoulder, LeftElbow, LeftWrist],
                [RightShoulder, RightElbow, RightWrist],
            ),
            AngleSource::KneeAverage => side_average(
                pose,
                [LeftHip, LeftKnee, LeftAnkle],
                [RightHip, RightKnee, RightAnkle],
            ),
            AngleSource::TorsoLean => {
                let hip_mid = midpoint(pose.point(LeftHip), pose.point(RightHip));
                let shoulder_mid =
                    midpoint(pose.point(LeftShoulder), pose.point(RightShoulder));
                let overhead = (hip_mid.0, hip_mid.1 - VERTICAL_REFERENCE_PX);
                angle_between(overhead, hip_mid, shoulder_mid)
            }
        }
    }

    pub fn in_start_band(&self, angle: f32) -> bool {
        (angle - self.start_angle).abs() <= self.tolerance
    }

    pub fn in_end_band(&self, angle: f32) -> bool {
        (angle - self.end_angle).abs() <= self.tolerance
    }
}

/// Average the joint angle over both sides, falling back to whichever
/// single side yields an angle.
fn side_average(pose: &Pose, left: [KeypointName; 3], right: [KeypointName; 3]) -> Option<f32> {
    let side = |joints: [KeypointName; 3]| {
        angle_between(
            pose.point(joints[0]),
            pose.point(joints[1]),
            pose.point(joints[2]),
        )
    };

    match (side(left), side(right)) {
        (Some(l), Some(r)) => Some((l + r) / 2.0),
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Keypoint, KEYPOINT_COUNT};

    fn blank_pose() -> [Keypoint; KEYPOINT_COUNT] {
        std::array::from_fn(|i| Keypoint::new(KeypointName::ALL[i], 0.0, 0.0, 0.0))
    }

    fn set(kps: &mut [Keypoint; KEYPOINT_COUNT], part: KeypointName, x: f32, y: f32) {
        kps[part.index()] = Keypoint::new(part, x, y, 0.9);
    }

    /// Arm chain with the given elbow angle, mirrored onto both sides
    fn arm_pose(angle_deg: f32) -> Pose {
        let mut kps = blank_pose();
        let wrist = wrist_at(angle_deg);
        for (shoulder, elbow, hand) in [
            (LeftShoulder, LeftElbow, LeftWrist),
            (RightShoulder, RightElbow, RightWrist),
        ] {
            set(&mut kps, shoulder, 0.0, 0.0);
            set(&mut kps, elbow, 100.0, 0.0);
            set(&mut kps, hand, wrist.0, wrist.1);
        }
        Pose::new(kps)
    }

    /// Wrist position giving `angle_deg` at an elbow of (100, 0) with the
    /// shoulder at the origin
    fn wrist_at(angle_deg: f32) -> (f32, f32) {
        let bearing = (180.0 - angle_deg).to_radians();
        (100.0 + 100.0 * bearing.cos(), 100.0 * bearing.sin())
    }

    #[test]
    fn ids_round_trip() {
        for exercise in Exercise::ALL {
            assert_eq!(Exercise::from_id(exercise.id()), Some(exercise));
        }
        assert_eq!(Exercise::from_id("dumbbellCurl"), Some(Exercise::Curl));
        assert_eq!(Exercise::from_id("yoga"), None);
    }

    #[test]
    fn catalog_order_matches_discriminants() {
        for exercise in Exercise::ALL {
            assert_eq!(exercise.definition().exercise, exercise);
        }
    }

    #[test]
    fn arm_average_matches_constructed_angle() {
        let pose = arm_pose(120.0);
        let angle = Exercise::Pushup
            .definition()
            .controlling_angle(&pose, 0.3)
            .unwrap();
        assert!((angle - 120.0).abs() < 0.5);
    }

    #[test]
    fn missing_required_keypoint_gates_the_frame() {
        let mut pose = arm_pose(120.0);
        let mut kps = *pose.keypoints();
        kps[RightWrist.index()].score = 0.1;
        pose = Pose::new(kps);

        assert!(Exercise::Pushup
            .definition()
            .controlling_angle(&pose, 0.3)
            .is_none());
    }

    #[test]
    fn degenerate_side_falls_back_to_the_other() {
        let mut kps = blank_pose();
        set(&mut kps, LeftShoulder, 0.0, 0.0);
        set(&mut kps, LeftElbow, 100.0, 0.0);
        let wrist = wrist_at(140.0);
        set(&mut kps, LeftWrist, wrist.0, wrist.1);
        // Right side collapsed to one point: no angle on that side
        set(&mut kps, RightShoulder, 300.0, 300.0);
        set(&mut kps, RightElbow, 300.0, 300.0);
        set(&mut kps, RightWrist, 300.0, 300.0);

        let angle = Exercise::Pushup
            .definition()
            .controlling_angle(&Pose::new(kps), 0.3)
            .unwrap();
        assert!((angle - 140.0).abs() < 0.5);
    }

    #[test]
    fn torso_lean_is_90_when_lying_flat() {
        let mut kps = blank_pose();
        set(&mut kps, LeftHip, 90.0, 200.0);
        set(&mut kps, RightHip, 110.0, 200.0);
        // Shoulders level with the hips, off to the side
        set(&mut kps, LeftShoulder, 220.0, 200.0);
        set(&mut kps, RightShoulder, 220.0, 200.0);

        let angle = Exercise::Crunch
            .definition()
            .controlling_angle(&Pose::new(kps), 0.3)
            .unwrap();
        assert!((angle - 90.0).abs() < 0.5);
    }

    #[test]
    fn angle_bands_respect_tolerance() {
        let def = Exercise::Squat.definition();
        assert!(def.in_start_band(168.0));
        assert!(def.in_end_band(92.0));
        assert!(!def.in_end_band(130.0));
    }
}
