//! Exercise detection core - geometry, catalog, rep counting and feedback
//!
//! Re-exports only. All logic in submodules.

mod catalog;
mod feedback;
mod geometry;
mod rep_counter;
mod tracker;

pub use catalog::{AngleSource, Exercise, ExerciseDefinition, CATALOG};
pub use feedback::{evaluate, Feedback};
pub use geometry::{angle_between, midpoint};
pub use rep_counter::{Phase, RepCounter};
pub use tracker::{ExerciseTracker, FrameResult, SessionSummary, TrackerError};
