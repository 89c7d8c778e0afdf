//! Pose smoothing - low-pass filter over a sliding frame window
//!
//! Suppresses frame-to-frame jitter from the detector before any angles
//! are computed. Each coordinate and the confidence score are blended with
//! the mean of the same keypoint across the recent history window.

use std::collections::VecDeque;

use crate::pose::{Keypoint, KeypointName, Pose};

/// Smoothing parameters
#[derive(Clone, Copy, Debug)]
pub struct SmootherConfig {
    /// Number of past frames averaged into the blend
    pub window: usize,
    /// Mixing coefficient: weight of the current raw value.
    /// Higher = more responsive, lower = more stable.
    pub alpha: f32,
    /// Keypoints below this confidence pass through unsmoothed
    pub min_confidence: f32,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            window: 4,
            alpha: 0.8,
            min_confidence: 0.3,
        }
    }
}

/// Temporal pose filter with a bounded FIFO history of smoothed frames
pub struct PoseSmoother {
    config: SmootherConfig,
    history: VecDeque<Pose>,
}

impl PoseSmoother {
    pub fn new(config: SmootherConfig) -> Self {
        Self {
            history: VecDeque::with_capacity(config.window + 1),
            config,
        }
    }

    /// Filter one raw frame, returning a new smoothed pose.
    ///
    /// The very first frame seeds the history and is returned unchanged.
    /// Low-confidence keypoints are passed through raw so that noisy
    /// detections never drag the history toward them.
    pub fn smooth(&mut self, raw: &Pose) -> Pose {
        if self.history.is_empty() {
            self.push(raw.clone());
            return raw.clone();
        }

        let keypoints = std::array::from_fn(|i| {
            let part = KeypointName::ALL[i];
            let kp = *raw.get(part);

            if kp.score < self.config.min_confidence {
                return kp;
            }

            let (mean_x, mean_y, mean_score) = self.history_mean(part);
            Keypoint::new(
                part,
                self.blend(kp.x, mean_x),
                self.blend(kp.y, mean_y),
                self.blend(kp.score, mean_score),
            )
        });

        let smoothed = Pose::new(keypoints);
        self.push(smoothed.clone());
        smoothed
    }

    /// Clear the history (on tracking restart)
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }

    /// Frames currently held in the window
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn push(&mut self, pose: Pose) {
        self.history.push_back(pose);
        if self.history.len() > self.config.window {
            self.history.pop_front();
        }
    }

    fn blend(&self, current: f32, mean: f32) -> f32 {
        self.config.alpha * current + (1.0 - self.config.alpha) * mean
    }

    fn history_mean(&self, part: KeypointName) -> (f32, f32, f32) {
        let n = self.history.len() as f32;
        let mut sum = (0.0, 0.0, 0.0);
        for pose in &self.history {
            let kp = pose.get(part);
            sum.0 += kp.x;
            sum.1 += kp.y;
            sum.2 += kp.score;
        }
        (sum.0 / n, sum.1 / n, sum.2 / n)
    }
}

impl Default for PoseSmoother {
    fn default() -> Self {
        Self::new(SmootherConfig::default())
    }
}
