//! Focus timer state.
//!
//! Pure countdown arithmetic and formatting; the UI owns real time and
//! feeds elapsed seconds into [`FocusTimer::tick`].

use serde::Serialize;

/// A selectable session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerPreset {
    pub label: &'static str,
    pub minutes: u32,
}

/// The preset lengths offered on the timer screen.
pub const TIMER_PRESETS: &[TimerPreset] = &[
    TimerPreset { label: "30 min", minutes: 30 },
    TimerPreset { label: "50 min", minutes: 50 },
    TimerPreset { label: "1 hour", minutes: 60 },
    TimerPreset { label: "1.5 hours", minutes: 90 },
    TimerPreset { label: "2 hours", minutes: 120 },
];

/// Countdown state for one focus session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    running: bool,
}

impl FocusTimer {
    pub fn new(minutes: u32) -> Self {
        let total_seconds = minutes * 60;
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            running: false,
        }
    }

    pub fn from_preset(preset: TimerPreset) -> Self {
        Self::new(preset.minutes)
    }

    pub fn start(&mut self) {
        if self.remaining_seconds > 0 {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.running = false;
    }

    /// Advance the countdown. Saturates at zero and stops when finished.
    pub fn tick(&mut self, elapsed_seconds: u32) {
        if !self.running {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(elapsed_seconds);
        if self.remaining_seconds == 0 {
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Remaining time as `M:SS` (minutes are not capped at 59).
    pub fn format_remaining(&self) -> String {
        let minutes = self.remaining_seconds / 60;
        let seconds = self.remaining_seconds % 60;
        format!("{minutes}:{seconds:02}")
    }

    /// Fraction of the session completed, 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        f64::from(self.total_seconds - self.remaining_seconds) / f64::from(self.total_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_seconds() {
        let mut timer = FocusTimer::new(30);
        assert_eq!(timer.format_remaining(), "30:00");
        timer.start();
        timer.tick(24 * 60 + 53);
        assert_eq!(timer.format_remaining(), "5:07");
    }

    #[test]
    fn test_long_presets_exceed_an_hour() {
        let timer = FocusTimer::from_preset(TIMER_PRESETS[4]);
        assert_eq!(timer.format_remaining(), "120:00");
    }

    #[test]
    fn test_tick_saturates_and_stops() {
        let mut timer = FocusTimer::new(1);
        timer.start();
        timer.tick(90);
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(timer.is_finished());
        assert!(!timer.is_running());
        assert!((timer.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut timer = FocusTimer::new(30);
        timer.tick(60);
        assert_eq!(timer.remaining_seconds(), 30 * 60);

        timer.start();
        timer.tick(60);
        timer.pause();
        timer.tick(60);
        assert_eq!(timer.remaining_seconds(), 29 * 60);
    }

    #[test]
    fn test_reset() {
        let mut timer = FocusTimer::new(50);
        timer.start();
        timer.tick(100);
        timer.reset();
        assert_eq!(timer.remaining_seconds(), 50 * 60);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_finished_timer_does_not_restart() {
        let mut timer = FocusTimer::new(1);
        timer.start();
        timer.tick(60);
        timer.start();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_progress_midway() {
        let mut timer = FocusTimer::new(10);
        timer.start();
        timer.tick(5 * 60);
        assert!((timer.progress() - 0.5).abs() < f64::EPSILON);
    }
}
