//! Crash/reset state machine: `Flying -> Crashed -> Flying`.
//!
//! The reset deadline is measured on the host clock, so it elapses at the
//! same wall-clock rate regardless of how many frames are rendered.

use skyward_core::constants::CRASH_RESET_DELAY_SECS;
use skyward_core::enums::FlightPhase;
use skyward_core::state::CrashOverlayView;

#[derive(Debug, Clone, Default)]
pub struct CrashState {
    phase: FlightPhase,
    /// Host clock reading at which the reset fires.
    reset_at_secs: f64,
    final_score: u32,
}

impl CrashState {
    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_crashed(&self) -> bool {
        self.phase == FlightPhase::Crashed
    }

    /// Enter `Crashed` at `now_secs`.
    ///
    /// Returns `false` without touching the deadline if already crashed, so
    /// only the first collision of an event counts.
    pub fn trigger(&mut self, now_secs: f64, final_score: u32) -> bool {
        if self.is_crashed() {
            return false;
        }
        self.phase = FlightPhase::Crashed;
        self.reset_at_secs = now_secs + CRASH_RESET_DELAY_SECS;
        self.final_score = final_score;
        true
    }

    /// Seconds left before the reset, or `None` while flying.
    pub fn remaining_secs(&self, now_secs: f64) -> Option<f64> {
        self.is_crashed()
            .then(|| (self.reset_at_secs - now_secs).max(0.0))
    }

    /// Return to `Flying` once the deadline has passed.
    /// Returns `true` exactly once per crash, when the reset is due.
    pub fn poll(&mut self, now_secs: f64) -> bool {
        if self.is_crashed() && now_secs >= self.reset_at_secs {
            self.phase = FlightPhase::Flying;
            return true;
        }
        false
    }

    /// Crash screen contents while crashed.
    pub fn overlay(&self, now_secs: f64) -> Option<CrashOverlayView> {
        self.remaining_secs(now_secs).map(|remaining_secs| CrashOverlayView {
            final_score: self.final_score,
            remaining_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_flying() {
        let crash = CrashState::default();
        assert_eq!(crash.phase(), FlightPhase::Flying);
        assert!(crash.overlay(0.0).is_none());
    }

    #[test]
    fn test_second_trigger_is_ignored() {
        let mut crash = CrashState::default();
        assert!(crash.trigger(10.0, 5));
        assert!(!crash.trigger(11.0, 7));
        // Deadline and score come from the first trigger.
        let overlay = crash.overlay(11.0).unwrap();
        assert_eq!(overlay.final_score, 5);
        assert!((overlay.remaining_secs - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_poll_fires_once_after_delay() {
        let mut crash = CrashState::default();
        crash.trigger(1.0, 0);
        assert!(!crash.poll(3.999));
        assert!(crash.is_crashed());
        assert!(crash.poll(4.0));
        assert_eq!(crash.phase(), FlightPhase::Flying);
        assert!(!crash.poll(4.5));
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut crash = CrashState::default();
        crash.trigger(0.0, 0);
        assert_eq!(crash.remaining_secs(10.0), Some(0.0));
    }

    #[test]
    fn test_can_crash_again_after_reset() {
        let mut crash = CrashState::default();
        crash.trigger(0.0, 0);
        crash.poll(3.0);
        assert!(crash.trigger(5.0, 2));
        assert!(crash.is_crashed());
    }
}
