//! Reptrack Web - exercise rep counting from browser pose detection
//!
//! Per-frame core for a workout tracking UI: smooths raw 2D keypoint
//! detections, derives the controlling joint angle for the selected
//! exercise, drives a debounced rep state machine and emits form feedback.
//! Camera handling, the pose model and persistence all live on the JS side;
//! this crate only computes.
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - The panic hook installed on load
//! - Re-exports of the bridge entry points

mod bridge;
pub mod exercise;
pub mod pose;
pub mod smoothing;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    process_frame, reset_session, session_summary, set_exercise, FrameUpdate, WorkoutSummary,
};

/// Called automatically when the WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
