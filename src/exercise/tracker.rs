//! Exercise tracking session façade
//!
//! Owns the smoother, the rep counter and the session stats for one
//! tracking session, and exposes the three operations the UI layer needs:
//! select an exercise, process one frame, read the session summary.

use thiserror::Error;

use crate::pose::Pose;
use crate::smoothing::{PoseSmoother, SmootherConfig};

use super::catalog::Exercise;
use super::feedback::{self, Feedback};
use super::rep_counter::{Phase, RepCounter};

/// Errors surfaced to the caller. Everything else degrades into feedback.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("unsupported exercise id: {0:?}")]
    UnsupportedExercise(String),
}

/// Per-frame result handed to the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameResult {
    pub rep_count: u32,
    pub feedback: Feedback,
}

/// End-of-session stats handed to the persistence layer
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub exercise_id: &'static str,
    pub rep_count: u32,
    pub duration_seconds: u32,
    /// Fraction of evaluated frames with good form, in [0, 1]
    pub form_score: f32,
}

/// One tracking session: smoothing, rep counting and form scoring
pub struct ExerciseTracker {
    exercise: Exercise,
    smoother: PoseSmoother,
    counter: RepCounter,
    started_at: Option<f64>,
    last_frame_at: f64,
    evaluated_frames: u32,
    quality_sum: f32,
}

impl ExerciseTracker {
    pub fn new(exercise: Exercise) -> Self {
        Self::with_config(exercise, SmootherConfig::default())
    }

    pub fn with_config(exercise: Exercise, config: SmootherConfig) -> Self {
        Self {
            exercise,
            smoother: PoseSmoother::new(config),
            counter: RepCounter::new(),
            started_at: None,
            last_frame_at: 0.0,
            evaluated_frames: 0,
            quality_sum: 0.0,
        }
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn rep_count(&self) -> u32 {
        self.counter.rep_count()
    }

    pub fn phase(&self) -> Phase {
        self.counter.phase()
    }

    /// Switch to the exercise named by `id`. In-progress reps are
    /// discarded unconditionally; they never carry over.
    pub fn set_exercise(&mut self, id: &str) -> Result<(), TrackerError> {
        match Exercise::from_id(id) {
            Some(exercise) => {
                self.exercise = exercise;
                self.reset();
                Ok(())
            }
            None => Err(TrackerError::UnsupportedExercise(id.to_string())),
        }
    }

    /// Restart the session without changing the selected exercise
    pub fn reset(&mut self) {
        self.counter.reset();
        self.smoother.reset();
        self.started_at = None;
        self.last_frame_at = 0.0;
        self.evaluated_frames = 0;
        self.quality_sum = 0.0;
    }

    /// Process one detection frame.
    ///
    /// `t_seconds` is the frame timestamp; frames must arrive in temporal
    /// order. Never fails: missing or low-confidence data only degrades
    /// the feedback while the rep count holds.
    pub fn process_frame(&mut self, raw: &Pose, t_seconds: f64) -> FrameResult {
        if self.started_at.is_none() {
            self.started_at = Some(t_seconds);
        }
        self.last_frame_at = t_seconds;

        let pose = self.smoother.smooth(raw);
        let def = self.exercise.definition();
        let floor = self.smoother.config().min_confidence;

        let angle = def.controlling_angle(&pose, floor);
        if let Some(angle) = angle {
            self.counter.advance(def, angle);
        }

        let feedback = feedback::evaluate(def, &pose, angle, floor);
        if let Some(quality) = feedback.quality() {
            self.evaluated_frames += 1;
            self.quality_sum += quality;
        }

        FrameResult {
            rep_count: self.counter.rep_count(),
            feedback,
        }
    }

    /// Session stats for persistence at session end
    pub fn session_summary(&self) -> SessionSummary {
        let duration = match self.started_at {
            Some(start) => (self.last_frame_at - start).round().max(0.0) as u32,
            None => 0,
        };
        let form_score = if self.evaluated_frames > 0 {
            self.quality_sum / self.evaluated_frames as f32
        } else {
            0.0
        };

        SessionSummary {
            exercise_id: self.exercise.id(),
            rep_count: self.counter.rep_count(),
            duration_seconds: duration,
            form_score,
        }
    }
}
