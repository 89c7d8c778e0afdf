//! Temporal filtering of raw detector output
//!
//! Re-exports only. All logic in submodules.

mod smoother;

pub use smoother::{PoseSmoother, SmootherConfig};
