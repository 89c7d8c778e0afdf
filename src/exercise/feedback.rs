//! Form feedback rules
//!
//! Derives one short guidance message per frame from the controlling angle
//! and keypoint alignment. Advisory only: feedback never touches the rep
//! count. Rules run in fixed priority order and the first match wins.
//!
//! Each variant also carries a numeric form quality so that session scoring
//! never has to parse the display string.

use crate::pose::{KeypointName::*, Pose};

use super::catalog::{AngleSource, Exercise, ExerciseDefinition};
use super::geometry::midpoint;

/// Max shoulder/hip vertical offset before a push-up body line is flagged
const BODY_SAG_PX: f32 = 50.0;

/// Max knee-over-ankle horizontal drift during a squat
const KNEE_DRIFT_PX: f32 = 40.0;

/// Max elbow-from-shoulder horizontal drift during a curl
const ELBOW_DRIFT_PX: f32 = 30.0;

/// Per-frame form assessment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Required keypoints missing or geometry degenerate
    NotDetected,
    /// Controlling angle pushed past the end position
    BeyondEnd,
    /// Controlling angle never returned to the start position
    ShortOfStart,
    /// Push-up: hips sagging or piking out of the body line
    BodySagging,
    /// Squat: knees drifting past the ankles
    KneesPastAnkles,
    /// Curl: elbows swinging away from the torso
    ElbowsDrifting,
    GoodForm,
}

impl Feedback {
    /// Human-readable guidance for the UI
    pub fn message(self, exercise: Exercise) -> &'static str {
        match self {
            Feedback::NotDetected => match exercise {
                Exercise::Pushup | Exercise::Curl => {
                    "Position not detected - keep your shoulders, elbows and wrists in view"
                }
                Exercise::Squat => {
                    "Position not detected - keep your hips, knees and ankles in view"
                }
                Exercise::Crunch => {
                    "Position not detected - keep your shoulders and hips in view"
                }
            },
            Feedback::BeyondEnd => match exercise {
                Exercise::Pushup => "Don't go too low - ease up from the bottom",
                Exercise::Squat => "Don't squat too deep - rise a little",
                Exercise::Curl => "Don't over-curl - stop at the top",
                Exercise::Crunch => "Don't pull too far forward",
            },
            Feedback::ShortOfStart => match exercise {
                Exercise::Pushup => "Extend your arms fully at the top",
                Exercise::Squat => "Stand up fully between reps",
                Exercise::Curl => "Lower the weight all the way down",
                Exercise::Crunch => "Lower your shoulders back to the floor",
            },
            Feedback::BodySagging => "Keep your body in a straight line",
            Feedback::KneesPastAnkles => "Keep your knees over your ankles",
            Feedback::ElbowsDrifting => "Keep your elbows close to your body",
            Feedback::GoodForm => "Good form - keep it up",
        }
    }

    /// Numeric form quality for session scoring.
    ///
    /// `None` means the frame could not be evaluated and must not count
    /// toward the score either way.
    pub fn quality(self) -> Option<f32> {
        match self {
            Feedback::NotDetected => None,
            Feedback::GoodForm => Some(1.0),
            _ => Some(0.0),
        }
    }
}

/// Evaluate one smoothed frame against the feedback rules.
///
/// `angle` is the controlling angle already derived for this frame, absent
/// when the frame was gated.
pub fn evaluate(
    def: &ExerciseDefinition,
    pose: &Pose,
    angle: Option<f32>,
    floor: f32,
) -> Feedback {
    let angle = match angle {
        Some(angle) => angle,
        None => return Feedback::NotDetected,
    };

    if angle < def.end_angle - def.tolerance {
        return Feedback::BeyondEnd;
    }
    if angle > def.start_angle + def.tolerance {
        return Feedback::ShortOfStart;
    }

    if let Some(misalignment) = alignment_fault(def, pose, floor) {
        return misalignment;
    }

    Feedback::GoodForm
}

/// Exercise-specific alignment check against a fixed pixel threshold.
/// Skipped silently when the auxiliary keypoints are below the floor.
fn alignment_fault(def: &ExerciseDefinition, pose: &Pose, floor: f32) -> Option<Feedback> {
    match def.angle_source {
        AngleSource::ArmAverage if def.exercise == Exercise::Pushup => {
            let shoulder_mid = midpoint(pose.point(LeftShoulder), pose.point(RightShoulder));
            let left_hip = pose.point_if_confident(LeftHip, floor)?;
            let right_hip = pose.point_if_confident(RightHip, floor)?;
            let hip_mid = midpoint(left_hip, right_hip);
            if (shoulder_mid.1 - hip_mid.1).abs() > BODY_SAG_PX {
                return Some(Feedback::BodySagging);
            }
            None
        }
        AngleSource::ArmAverage => {
            // Curl: elbows should stay under the shoulders
            let drift = |shoulder, elbow| {
                let s = pose.point(shoulder);
                let e = pose.point(elbow);
                (e.0 - s.0).abs()
            };
            let worst = drift(LeftShoulder, LeftElbow).max(drift(RightShoulder, RightElbow));
            if worst > ELBOW_DRIFT_PX {
                return Some(Feedback::ElbowsDrifting);
            }
            None
        }
        AngleSource::KneeAverage => {
            let drift = |knee, ankle| {
                let k = pose.point(knee);
                let a = pose.point(ankle);
                (k.0 - a.0).abs()
            };
            let worst = drift(LeftKnee, LeftAnkle).max(drift(RightKnee, RightAnkle));
            if worst > KNEE_DRIFT_PX {
                return Some(Feedback::KneesPastAnkles);
            }
            None
        }
        AngleSource::TorsoLean => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Keypoint, KeypointName, KEYPOINT_COUNT};

    fn blank_pose() -> [Keypoint; KEYPOINT_COUNT] {
        std::array::from_fn(|i| Keypoint::new(KeypointName::ALL[i], 0.0, 0.0, 0.0))
    }

    fn set(kps: &mut [Keypoint; KEYPOINT_COUNT], part: KeypointName, x: f32, y: f32) {
        kps[part.index()] = Keypoint::new(part, x, y, 0.9);
    }

    #[test]
    fn missing_angle_reports_not_detected() {
        let pose = Pose::new(blank_pose());
        let def = Exercise::Pushup.definition();
        let feedback = evaluate(def, &pose, None, 0.3);
        assert_eq!(feedback, Feedback::NotDetected);
        assert!(feedback.message(Exercise::Pushup).contains("not detected"));
        assert_eq!(feedback.quality(), None);
    }

    #[test]
    fn angle_past_end_band_flags_overextension() {
        let def = Exercise::Pushup.definition();
        let pose = Pose::new(blank_pose());
        assert_eq!(evaluate(def, &pose, Some(60.0), 0.3), Feedback::BeyondEnd);
    }

    #[test]
    fn angle_past_start_band_asks_for_full_extension() {
        let def = Exercise::Crunch.definition();
        let pose = Pose::new(blank_pose());
        assert_eq!(
            evaluate(def, &pose, Some(110.0), 0.3),
            Feedback::ShortOfStart
        );
    }

    #[test]
    fn sagging_hips_override_good_form() {
        let mut kps = blank_pose();
        set(&mut kps, LeftShoulder, 100.0, 100.0);
        set(&mut kps, RightShoulder, 140.0, 100.0);
        set(&mut kps, LeftHip, 300.0, 180.0);
        set(&mut kps, RightHip, 340.0, 180.0);
        let pose = Pose::new(kps);

        let def = Exercise::Pushup.definition();
        assert_eq!(
            evaluate(def, &pose, Some(150.0), 0.3),
            Feedback::BodySagging
        );
    }

    #[test]
    fn sag_check_skipped_when_hips_not_confident() {
        let mut kps = blank_pose();
        set(&mut kps, LeftShoulder, 100.0, 100.0);
        set(&mut kps, RightShoulder, 140.0, 100.0);
        // Hips at default score 0.0: below any sensible floor
        let pose = Pose::new(kps);

        let def = Exercise::Pushup.definition();
        assert_eq!(evaluate(def, &pose, Some(150.0), 0.3), Feedback::GoodForm);
    }

    #[test]
    fn knees_past_ankles_flagged_for_squat() {
        let mut kps = blank_pose();
        set(&mut kps, LeftKnee, 200.0, 300.0);
        set(&mut kps, LeftAnkle, 140.0, 400.0);
        set(&mut kps, RightKnee, 240.0, 300.0);
        set(&mut kps, RightAnkle, 240.0, 400.0);
        let pose = Pose::new(kps);

        let def = Exercise::Squat.definition();
        assert_eq!(
            evaluate(def, &pose, Some(120.0), 0.3),
            Feedback::KneesPastAnkles
        );
    }

    #[test]
    fn drifting_elbows_flagged_for_curl() {
        let mut kps = blank_pose();
        set(&mut kps, LeftShoulder, 100.0, 100.0);
        set(&mut kps, LeftElbow, 150.0, 180.0);
        set(&mut kps, RightShoulder, 200.0, 100.0);
        set(&mut kps, RightElbow, 200.0, 180.0);
        let pose = Pose::new(kps);

        let def = Exercise::Curl.definition();
        assert_eq!(
            evaluate(def, &pose, Some(100.0), 0.3),
            Feedback::ElbowsDrifting
        );
    }

    #[test]
    fn clean_frame_reads_good_form() {
        let mut kps = blank_pose();
        set(&mut kps, LeftKnee, 200.0, 300.0);
        set(&mut kps, LeftAnkle, 200.0, 400.0);
        set(&mut kps, RightKnee, 240.0, 300.0);
        set(&mut kps, RightAnkle, 240.0, 400.0);
        let pose = Pose::new(kps);

        let def = Exercise::Squat.definition();
        let feedback = evaluate(def, &pose, Some(120.0), 0.3);
        assert_eq!(feedback, Feedback::GoodForm);
        assert_eq!(feedback.quality(), Some(1.0));
    }
}
