//! Rep counting state machine
//!
//! One generic routine driven by the catalog's angle bands. A rep cycle
//! walks AwaitingStart -> AwaitingEnd -> HoldingEnd -> AwaitingStart; the
//! count increments exactly once, on entry to HoldingEnd. HoldingEnd keeps
//! consecutive frames inside the end band from re-counting while the user
//! holds the position, and releases only once the angle returns to the
//! start band.

use super::catalog::ExerciseDefinition;

/// Where in the rep cycle the user currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the controlling angle to reach the start position
    AwaitingStart,
    /// Start seen; waiting for the end position
    AwaitingEnd,
    /// End seen and counted; waiting for the return to the start position
    HoldingEnd,
}

/// Debounced rep counter for one tracking session
pub struct RepCounter {
    phase: Phase,
    rep_count: u32,
}

impl RepCounter {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingStart,
            rep_count: 0,
        }
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Feed one frame's controlling angle. Returns true when a rep was
    /// counted on this frame. At most one transition fires per frame.
    ///
    /// Frames with no computable angle must not reach this method; the
    /// caller skips them and the machine holds its phase.
    pub fn advance(&mut self, def: &ExerciseDefinition, angle: f32) -> bool {
        match self.phase {
            Phase::AwaitingStart => {
                if def.in_start_band(angle) {
                    self.phase = Phase::AwaitingEnd;
                }
                false
            }
            Phase::AwaitingEnd => {
                if def.in_end_band(angle) {
                    self.rep_count += 1;
                    self.phase = Phase::HoldingEnd;
                    true
                } else {
                    false
                }
            }
            Phase::HoldingEnd => {
                if def.in_start_band(angle) {
                    self.phase = Phase::AwaitingStart;
                }
                false
            }
        }
    }

    /// Discard progress: count back to zero, phase back to AwaitingStart
    pub fn reset(&mut self) {
        self.phase = Phase::AwaitingStart;
        self.rep_count = 0;
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::Exercise;

    fn run(def: &ExerciseDefinition, angles: &[f32]) -> RepCounter {
        let mut counter = RepCounter::new();
        for &angle in angles {
            counter.advance(def, angle);
        }
        counter
    }

    #[test]
    fn pushup_cycle_counts_one_rep() {
        let def = Exercise::Pushup.definition();
        let counter = run(def, &[170.0, 172.0, 88.0, 85.0, 168.0]);
        assert_eq!(counter.rep_count(), 1);
        assert_eq!(counter.phase(), Phase::AwaitingStart);
    }

    #[test]
    fn squat_without_reaching_depth_counts_nothing() {
        let def = Exercise::Squat.definition();
        assert_eq!(run(def, &[168.0, 92.0, 165.0]).rep_count(), 1);
        assert_eq!(run(def, &[168.0, 130.0, 168.0]).rep_count(), 0);
    }

    #[test]
    fn holding_the_end_position_counts_once() {
        let def = Exercise::Crunch.definition();
        let mut counter = RepCounter::new();
        counter.advance(def, 90.0);
        // Many consecutive frames inside the end band
        for _ in 0..20 {
            counter.advance(def, 55.0);
        }
        assert_eq!(counter.rep_count(), 1);
        assert_eq!(counter.phase(), Phase::HoldingEnd);

        // Back to the start band releases the hold without counting
        counter.advance(def, 90.0);
        assert_eq!(counter.rep_count(), 1);
        assert_eq!(counter.phase(), Phase::AwaitingStart);
    }

    #[test]
    fn repeating_one_frame_never_inflates_the_count() {
        let def = Exercise::Pushup.definition();
        let mut counter = RepCounter::new();
        for _ in 0..50 {
            counter.advance(def, 170.0);
        }
        assert_eq!(counter.rep_count(), 0);
        assert_eq!(counter.phase(), Phase::AwaitingEnd);
    }

    #[test]
    fn count_is_monotone_over_noise() {
        let def = Exercise::Squat.definition();
        let mut counter = RepCounter::new();
        let mut last = 0;
        let angles = [170.0, 150.0, 95.0, 120.0, 88.0, 160.0, 170.0, 92.0, 165.0];
        for angle in angles {
            counter.advance(def, angle);
            assert!(counter.rep_count() >= last);
            last = counter.rep_count();
        }
    }

    #[test]
    fn reset_discards_progress() {
        let def = Exercise::Pushup.definition();
        let mut counter = run(def, &[170.0, 88.0]);
        assert_eq!(counter.rep_count(), 1);

        counter.reset();
        assert_eq!(counter.rep_count(), 0);
        assert_eq!(counter.phase(), Phase::AwaitingStart);
    }
}
