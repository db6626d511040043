//! Focus Timer
//!
//! Countdown state for the dashboard timer widget. The widget drives it
//! with a one-second interval; the whole state serializes into session
//! storage so a page reload picks up where it left off.

use serde::{Deserialize, Serialize};

/// Durations offered by the preset buttons, in minutes
pub const PRESET_MINUTES: [u32; 4] = [15, 25, 45, 60];

pub const DEFAULT_MINUTES: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub total_secs: u32,
    pub remaining_secs: u32,
    pub running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::with_minutes(DEFAULT_MINUTES)
    }
}

impl TimerState {
    pub fn with_minutes(minutes: u32) -> Self {
        let secs = minutes * 60;
        TimerState { total_secs: secs, remaining_secs: secs, running: false }
    }

    /// One second elapsed. Stops itself on reaching zero.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
        }
    }

    pub fn start(&mut self) {
        if self.remaining_secs > 0 {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.remaining_secs = self.total_secs;
        self.running = false;
    }

    pub fn finished(&self) -> bool {
        self.remaining_secs == 0 && self.total_secs > 0
    }

    /// Elapsed share of the countdown, for the progress ring
    pub fn fraction_done(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        let elapsed = self.total_secs - self.remaining_secs.min(self.total_secs);
        elapsed as f64 / self.total_secs as f64
    }

    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_only_counts_while_running() {
        let mut t = TimerState::with_minutes(1);
        t.tick();
        assert_eq!(t.remaining_secs, 60);
        t.start();
        t.tick();
        assert_eq!(t.remaining_secs, 59);
        t.pause();
        t.tick();
        assert_eq!(t.remaining_secs, 59);
    }

    #[test]
    fn test_stops_itself_at_zero() {
        let mut t = TimerState { total_secs: 2, remaining_secs: 2, running: true };
        t.tick();
        t.tick();
        assert!(!t.running);
        assert!(t.finished());
        t.tick();
        assert_eq!(t.remaining_secs, 0);
    }

    #[test]
    fn test_start_refuses_an_empty_countdown() {
        let mut t = TimerState { total_secs: 60, remaining_secs: 0, running: false };
        t.start();
        assert!(!t.running);
        t.reset();
        t.start();
        assert!(t.running);
        assert_eq!(t.remaining_secs, 60);
    }

    #[test]
    fn test_clock_is_zero_padded() {
        let t = TimerState { total_secs: 1500, remaining_secs: 65, running: false };
        assert_eq!(t.clock(), "01:05");
        assert_eq!(TimerState::with_minutes(25).clock(), "25:00");
    }

    #[test]
    fn test_fraction_done_bounds() {
        let mut t = TimerState::with_minutes(1);
        assert_eq!(t.fraction_done(), 0.0);
        t.start();
        for _ in 0..30 {
            t.tick();
        }
        assert_eq!(t.fraction_done(), 0.5);
        for _ in 0..60 {
            t.tick();
        }
        assert_eq!(t.fraction_done(), 1.0);
        assert_eq!(TimerState { total_secs: 0, remaining_secs: 0, running: false }.fraction_done(), 0.0);
    }
}
