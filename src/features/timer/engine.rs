//! Focus/break interval timer state machine.
//!
//! The engine is pure: it never sleeps, spawns, or plays sound. Callers feed
//! it one [`IntervalTimer::tick`] per elapsed second and react to the
//! [`PhaseComplete`] events it returns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default focus period in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
/// Default break period in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Errors raised by the timer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A requested duration was below one minute.
    #[error(
        "invalid timer configuration: focus {focus_minutes} min, break {break_minutes} min (both must be at least 1)"
    )]
    InvalidConfiguration {
        focus_minutes: u32,
        break_minutes: u32,
    },
}

/// Which of the two alternating periods is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Work period.
    Focus,
    /// Rest period.
    Break,
}

impl TimerMode {
    /// The mode that follows this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focus => "Focus Time",
            Self::Break => "Break Time",
        }
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Focus and break durations, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfiguration {
    focus_minutes: u32,
    break_minutes: u32,
}

impl TimerConfiguration {
    /// Build a configuration, rejecting durations below one minute.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfiguration` if either value is zero.
    pub const fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, TimerError> {
        if focus_minutes == 0 || break_minutes == 0 {
            return Err(TimerError::InvalidConfiguration {
                focus_minutes,
                break_minutes,
            });
        }
        Ok(Self {
            focus_minutes,
            break_minutes,
        })
    }

    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Length of the given mode's period in seconds.
    #[must_use]
    pub const fn duration_seconds(&self, mode: TimerMode) -> u64 {
        let minutes = match mode {
            TimerMode::Focus => self.focus_minutes,
            TimerMode::Break => self.break_minutes,
        };
        minutes as u64 * 60
    }
}

impl Default for TimerConfiguration {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

/// Emitted when a period reaches its configured duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseComplete {
    /// The mode that just finished.
    pub mode: TimerMode,
}

impl PhaseComplete {
    /// The mode the timer switched to.
    #[must_use]
    pub const fn next(&self) -> TimerMode {
        self.mode.other()
    }
}

/// Point-in-time view of the timer for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub elapsed_seconds: u64,
    pub remaining_seconds: u64,
    pub duration_seconds: u64,
    pub running: bool,
    /// Share of the period still left, rounded to a whole percent.
    pub percent_remaining: u8,
}

/// The focus/break countdown engine.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    config: TimerConfiguration,
    mode: TimerMode,
    elapsed_seconds: u64,
    running: bool,
}

impl IntervalTimer {
    /// Create a stopped timer at the start of a focus period.
    #[must_use]
    pub const fn new(config: TimerConfiguration) -> Self {
        Self {
            config,
            mode: TimerMode::Focus,
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Start counting. No-op if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting. No-op if already paused.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start if paused, pause if running.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Return to a stopped focus period with nothing elapsed.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_seconds = 0;
        self.mode = TimerMode::Focus;
    }

    /// Replace the durations.
    ///
    /// The new duration applies to the period in progress. If it is already
    /// used up, the period completes immediately and the event is returned.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfiguration` if either value is zero; the
    /// timer is left untouched.
    pub fn reconfigure(
        &mut self,
        focus_minutes: u32,
        break_minutes: u32,
    ) -> Result<Option<PhaseComplete>, TimerError> {
        self.config = TimerConfiguration::new(focus_minutes, break_minutes)?;

        if self.elapsed_seconds >= self.current_duration() {
            return Ok(Some(self.complete_phase()));
        }
        Ok(None)
    }

    /// Advance by one second.
    ///
    /// Returns the completion event when this second finishes the period.
    pub fn tick(&mut self) -> Option<PhaseComplete> {
        if !self.running {
            return None;
        }

        if self.elapsed_seconds + 1 >= self.current_duration() {
            Some(self.complete_phase())
        } else {
            self.elapsed_seconds += 1;
            None
        }
    }

    /// Current state for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn snapshot(&self) -> TimerSnapshot {
        let duration_seconds = self.current_duration();
        let remaining_seconds = duration_seconds - self.elapsed_seconds;
        // Integer round-half-up of 100 * remaining / duration.
        let percent_remaining =
            ((remaining_seconds * 200 + duration_seconds) / (duration_seconds * 2)) as u8;

        TimerSnapshot {
            mode: self.mode,
            elapsed_seconds: self.elapsed_seconds,
            remaining_seconds,
            duration_seconds,
            running: self.running,
            percent_remaining,
        }
    }

    #[must_use]
    pub const fn config(&self) -> TimerConfiguration {
        self.config
    }

    #[must_use]
    pub const fn mode(&self) -> TimerMode {
        self.mode
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    const fn current_duration(&self) -> u64 {
        self.config.duration_seconds(self.mode)
    }

    fn complete_phase(&mut self) -> PhaseComplete {
        let event = PhaseComplete { mode: self.mode };
        self.elapsed_seconds = 0;
        self.mode = self.mode.other();
        event
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new(TimerConfiguration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_timer(focus: u32, brk: u32) -> IntervalTimer {
        let mut timer = IntervalTimer::new(TimerConfiguration::new(focus, brk).unwrap());
        timer.start();
        timer
    }

    fn tick_n(timer: &mut IntervalTimer, n: u64) -> Vec<PhaseComplete> {
        (0..n).filter_map(|_| timer.tick()).collect()
    }

    #[test]
    fn test_new_timer_state() {
        let snap = IntervalTimer::default().snapshot();
        assert_eq!(snap.mode, TimerMode::Focus);
        assert_eq!(snap.elapsed_seconds, 0);
        assert_eq!(snap.remaining_seconds, 25 * 60);
        assert!(!snap.running);
        assert_eq!(snap.percent_remaining, 100);
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let mut timer = IntervalTimer::default();
        timer.start();
        timer.start();
        assert!(timer.is_running());
        timer.pause();
        timer.pause();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_toggle() {
        let mut timer = IntervalTimer::default();
        timer.toggle();
        assert!(timer.is_running());
        timer.toggle();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reconfigure_then_reset() {
        for (focus, brk) in [(1, 1), (7, 3), (25, 5), (90, 20)] {
            let mut timer = running_timer(25, 5);
            tick_n(&mut timer, 42);
            timer.reconfigure(focus, brk).unwrap();
            timer.reset();

            let snap = timer.snapshot();
            assert_eq!(snap.mode, TimerMode::Focus);
            assert_eq!(snap.remaining_seconds, u64::from(focus) * 60);
        }
    }

    #[test]
    fn test_full_focus_period_completes_once() {
        let mut timer = running_timer(2, 1);
        let events = tick_n(&mut timer, 120);

        assert_eq!(events, vec![PhaseComplete { mode: TimerMode::Focus }]);
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.snapshot().elapsed_seconds, 0);
    }

    #[test]
    fn test_completion_happens_on_last_second() {
        let mut timer = running_timer(1, 1);
        assert!(tick_n(&mut timer, 59).is_empty());
        assert_eq!(timer.snapshot().elapsed_seconds, 59);
        assert_eq!(timer.snapshot().remaining_seconds, 1);
        assert!(timer.tick().is_some());
    }

    #[test]
    fn test_paused_ticks_do_nothing() {
        let mut timer = running_timer(25, 5);
        tick_n(&mut timer, 10);
        timer.pause();

        assert!(tick_n(&mut timer, 5000).is_empty());
        assert_eq!(timer.snapshot().elapsed_seconds, 10);
    }

    #[test]
    fn test_zero_focus_rejected_without_side_effects() {
        let mut timer = running_timer(25, 5);
        tick_n(&mut timer, 30);
        let before = timer.snapshot();

        let err = timer.reconfigure(0, 5).unwrap_err();
        assert_eq!(
            err,
            TimerError::InvalidConfiguration {
                focus_minutes: 0,
                break_minutes: 5
            }
        );
        assert_eq!(timer.config(), TimerConfiguration::default());
        assert_eq!(timer.snapshot(), before);
    }

    #[test]
    fn test_zero_break_rejected() {
        let mut timer = IntervalTimer::default();
        assert!(timer.reconfigure(25, 0).is_err());
        assert_eq!(timer.config().break_minutes(), 5);
    }

    #[test]
    fn test_default_cycle_scenario() {
        let mut timer = IntervalTimer::default();
        timer.start();

        let events = tick_n(&mut timer, 1500);
        assert_eq!(events, vec![PhaseComplete { mode: TimerMode::Focus }]);
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.snapshot().elapsed_seconds, 0);

        let events = tick_n(&mut timer, 300);
        assert_eq!(events, vec![PhaseComplete { mode: TimerMode::Break }]);
        assert_eq!(events[0].next(), TimerMode::Focus);
        assert_eq!(timer.mode(), TimerMode::Focus);
    }

    #[test]
    fn test_reset_mid_cycle() {
        let mut timer = running_timer(25, 5);
        tick_n(&mut timer, 800);
        timer.reset();

        let snap = timer.snapshot();
        assert_eq!(snap.mode, TimerMode::Focus);
        assert_eq!(snap.elapsed_seconds, 0);
        assert!(!snap.running);
    }

    #[test]
    fn test_reset_from_break() {
        let mut timer = running_timer(1, 5);
        tick_n(&mut timer, 90);
        assert_eq!(timer.mode(), TimerMode::Break);

        timer.reset();
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.snapshot().elapsed_seconds, 0);
    }

    #[test]
    fn test_remaining_plus_elapsed_is_duration() {
        let mut timer = running_timer(2, 1);
        for _ in 0..400 {
            let snap = timer.snapshot();
            assert_eq!(
                snap.remaining_seconds + snap.elapsed_seconds,
                timer.config().duration_seconds(snap.mode)
            );
            assert!(snap.elapsed_seconds < snap.duration_seconds);
            timer.tick();
        }
    }

    #[test]
    fn test_reconfigure_applies_to_current_period() {
        let mut timer = running_timer(25, 5);
        tick_n(&mut timer, 60);

        assert!(timer.reconfigure(10, 5).unwrap().is_none());
        let snap = timer.snapshot();
        assert_eq!(snap.duration_seconds, 600);
        assert_eq!(snap.remaining_seconds, 540);
    }

    #[test]
    fn test_reconfigure_below_elapsed_completes_phase() {
        let mut timer = running_timer(25, 5);
        tick_n(&mut timer, 180);

        let event = timer.reconfigure(2, 5).unwrap();
        assert_eq!(event, Some(PhaseComplete { mode: TimerMode::Focus }));
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.snapshot().elapsed_seconds, 0);
        assert!(timer.is_running());
    }

    #[test]
    fn test_reconfigure_to_exact_elapsed_completes_phase() {
        let mut timer = running_timer(25, 5);
        tick_n(&mut timer, 120);

        assert!(timer.reconfigure(2, 5).unwrap().is_some());
    }

    #[test]
    fn test_percent_remaining_rounds() {
        let mut timer = running_timer(1, 1);
        tick_n(&mut timer, 1);
        // 59 / 60 = 98.33%
        assert_eq!(timer.snapshot().percent_remaining, 98);
        tick_n(&mut timer, 29);
        // 30 / 60 = 50%
        assert_eq!(timer.snapshot().percent_remaining, 50);
        tick_n(&mut timer, 29);
        // 1 / 60 = 1.67%
        assert_eq!(timer.snapshot().percent_remaining, 2);
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TimerMode::Break).unwrap(), "\"break\"");
    }
}
