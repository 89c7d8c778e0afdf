//! Bridge module - JS <-> Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod session;

pub use session::{
    process_frame, reset_session, session_summary, set_exercise, FrameUpdate, WorkoutSummary,
};
