//! Tracking session bridge
//!
//! Owns the single tracker instance behind the wasm boundary and converts
//! between JS-friendly types and the core. No algorithmic logic here.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::exercise::{Exercise, ExerciseTracker};
use crate::pose::{Pose, FLAT_LEN};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static TRACKER: RefCell<ExerciseTracker> =
        RefCell::new(ExerciseTracker::new(Exercise::Pushup));
}

/// Per-frame result exposed to JS
#[wasm_bindgen]
pub struct FrameUpdate {
    rep_count: u32,
    feedback: String,
}

#[wasm_bindgen]
impl FrameUpdate {
    #[wasm_bindgen(getter)]
    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    #[wasm_bindgen(getter)]
    pub fn feedback(&self) -> String {
        self.feedback.clone()
    }
}

/// Session stats exposed to JS for persistence
#[wasm_bindgen]
pub struct WorkoutSummary {
    exercise_id: String,
    rep_count: u32,
    duration_seconds: u32,
    form_score: f32,
}

#[wasm_bindgen]
impl WorkoutSummary {
    #[wasm_bindgen(getter)]
    pub fn exercise_id(&self) -> String {
        self.exercise_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    #[wasm_bindgen(getter)]
    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    #[wasm_bindgen(getter)]
    pub fn form_score(&self) -> f32 {
        self.form_score
    }
}

/// Select the exercise to track. Resets the session.
/// Fails when the id is not in the catalog.
#[wasm_bindgen]
pub fn set_exercise(id: &str) -> Result<(), JsValue> {
    TRACKER.with(|cell| {
        cell.borrow_mut()
            .set_exercise(id)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    })
}

/// Restart the current session without changing the exercise
#[wasm_bindgen]
pub fn reset_session() {
    TRACKER.with(|cell| cell.borrow_mut().reset());
}

/// Process one detection frame.
///
/// `data` is the flat keypoint array (13 x [x, y, score]); `t_seconds` the
/// frame timestamp. Returns `None` and logs a warning when the array has
/// the wrong length; the frame is dropped, never partially applied.
#[wasm_bindgen]
pub fn process_frame(data: &[f32], t_seconds: f64) -> Option<FrameUpdate> {
    let pose = match Pose::from_flat(data) {
        Some(pose) => pose,
        None => {
            web_sys::console::warn_1(
                &format!(
                    "Invalid keypoint data length: {} (expected {})",
                    data.len(),
                    FLAT_LEN
                )
                .into(),
            );
            return None;
        }
    };

    TRACKER.with(|cell| {
        let mut tracker = cell.borrow_mut();
        let result = tracker.process_frame(&pose, t_seconds);
        Some(FrameUpdate {
            rep_count: result.rep_count,
            feedback: result.feedback.message(tracker.exercise()).to_string(),
        })
    })
}

/// Session stats at session end, for the persistence layer
#[wasm_bindgen]
pub fn session_summary() -> WorkoutSummary {
    TRACKER.with(|cell| {
        let summary = cell.borrow().session_summary();
        WorkoutSummary {
            exercise_id: summary.exercise_id.to_string(),
            rep_count: summary.rep_count,
            duration_seconds: summary.duration_seconds,
            form_score: summary.form_score,
        }
    })
}
