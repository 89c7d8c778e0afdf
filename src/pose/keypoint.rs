//! Keypoint names and per-frame joint data
//!
//! The upstream detector reports 13 body joints per frame. Variant order
//! matches the layout of the flat array handed across the JS bridge.

/// Number of tracked keypoints per frame
pub const KEYPOINT_COUNT: usize = 13;

/// Floats per keypoint in the flat bridge array (x, y, score)
pub const VALUES_PER_KEYPOINT: usize = 3;

/// Named body joints, in bridge array order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypointName {
    Nose,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl KeypointName {
    /// All keypoints in array order
    pub const ALL: [KeypointName; KEYPOINT_COUNT] = [
        KeypointName::Nose,
        KeypointName::LeftShoulder,
        KeypointName::RightShoulder,
        KeypointName::LeftElbow,
        KeypointName::RightElbow,
        KeypointName::LeftWrist,
        KeypointName::RightWrist,
        KeypointName::LeftHip,
        KeypointName::RightHip,
        KeypointName::LeftKnee,
        KeypointName::RightKnee,
        KeypointName::LeftAnkle,
        KeypointName::RightAnkle,
    ];

    /// Position in the bridge array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Detector-side label (camelCase, matching the JS keypoint format)
    pub fn label(self) -> &'static str {
        match self {
            KeypointName::Nose => "nose",
            KeypointName::LeftShoulder => "leftShoulder",
            KeypointName::RightShoulder => "rightShoulder",
            KeypointName::LeftElbow => "leftElbow",
            KeypointName::RightElbow => "rightElbow",
            KeypointName::LeftWrist => "leftWrist",
            KeypointName::RightWrist => "rightWrist",
            KeypointName::LeftHip => "leftHip",
            KeypointName::RightHip => "rightHip",
            KeypointName::LeftKnee => "leftKnee",
            KeypointName::RightKnee => "rightKnee",
            KeypointName::LeftAnkle => "leftAnkle",
            KeypointName::RightAnkle => "rightAnkle",
        }
    }
}

/// One detected joint: frame-pixel position plus detector confidence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub part: KeypointName,
    pub x: f32,
    pub y: f32,
    pub score: f32,
}

impl Keypoint {
    pub fn new(part: KeypointName, x: f32, y: f32, score: f32) -> Self {
        Self { part, x, y, score }
    }

    /// Pixel position as a point tuple
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
