//! Host-side owner of the interval timer.
//!
//! A [`TimerSession`] ties the pure engine to its tick driver and its cue. The
//! driver only runs while the engine is running, and dropping the session
//! (tearing down the hosting view) cancels it.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

use super::cue::Chime;
use super::driver::{Tick, TickDriver};
use super::engine::{IntervalTimer, PhaseComplete, TimerConfiguration, TimerSnapshot};
use crate::error::DeskError;

/// The single owner of an [`IntervalTimer`].
pub struct TimerSession {
    timer: IntervalTimer,
    driver: TickDriver,
    ticks_tx: UnboundedSender<Tick>,
    ticks_rx: UnboundedReceiver<Tick>,
    chime: Box<dyn Chime>,
    completed_phases: u32,
}

impl TimerSession {
    /// Create a stopped session ticking once per second.
    #[must_use]
    pub fn new(config: TimerConfiguration, chime: Box<dyn Chime>) -> Self {
        Self::with_driver(config, chime, TickDriver::per_second())
    }

    /// Create a stopped session with a custom driver.
    #[must_use]
    pub fn with_driver(
        config: TimerConfiguration,
        chime: Box<dyn Chime>,
        driver: TickDriver,
    ) -> Self {
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        Self {
            timer: IntervalTimer::new(config),
            driver,
            ticks_tx,
            ticks_rx,
            chime,
            completed_phases: 0,
        }
    }

    /// Start the timer and its periodic driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver cannot be spawned; the timer stays paused.
    pub fn start(&mut self) -> Result<(), DeskError> {
        if self.timer.is_running() && self.driver.is_active() {
            return Ok(());
        }
        self.driver.start(self.ticks_tx.clone())?;
        self.timer.start();
        Ok(())
    }

    /// Pause the timer and cancel the driver.
    pub fn pause(&mut self) {
        self.timer.pause();
        self.stop_driver();
    }

    /// Start if paused, pause if running.
    ///
    /// # Errors
    ///
    /// Returns an error if starting the driver fails.
    pub fn toggle(&mut self) -> Result<(), DeskError> {
        if self.timer.is_running() {
            self.pause();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Reset to a stopped focus period and cancel the driver.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.stop_driver();
    }

    /// Change the durations; the cue plays if the current period is used up.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Timer` when a value is below one minute; nothing
    /// changes in that case.
    pub fn reconfigure(
        &mut self,
        focus_minutes: u32,
        break_minutes: u32,
    ) -> Result<Option<PhaseComplete>, DeskError> {
        let event = self.timer.reconfigure(focus_minutes, break_minutes)?;
        info!(focus_minutes, break_minutes, "timer reconfigured");
        if let Some(ref event) = event {
            self.notify(event);
        }
        Ok(event)
    }

    /// Apply every tick already queued, without waiting.
    pub fn drain(&mut self) -> Vec<PhaseComplete> {
        let mut events = Vec::new();
        while let Ok(Tick) = self.ticks_rx.try_recv() {
            if let Some(event) = self.apply_tick() {
                events.push(event);
            }
        }
        events
    }

    /// Wait for the next tick and apply it.
    ///
    /// Pending forever while the timer is paused.
    pub async fn next_event(&mut self) -> Option<PhaseComplete> {
        match self.ticks_rx.recv().await {
            Some(Tick) => self.apply_tick(),
            None => None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        self.timer.snapshot()
    }

    #[must_use]
    pub const fn config(&self) -> TimerConfiguration {
        self.timer.config()
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Whether a periodic driver is attached right now.
    #[must_use]
    pub fn is_driving(&self) -> bool {
        self.driver.is_active()
    }

    /// Periods finished since this session was created.
    #[must_use]
    pub const fn completed_phases(&self) -> u32 {
        self.completed_phases
    }

    fn apply_tick(&mut self) -> Option<PhaseComplete> {
        let event = self.timer.tick()?;
        self.notify(&event);
        Some(event)
    }

    fn notify(&mut self, event: &PhaseComplete) {
        self.completed_phases += 1;
        info!(finished = ?event.mode, next = ?event.next(), "phase complete");
        self.chime.play(event);
    }

    fn stop_driver(&mut self) {
        self.driver.stop();
        // Ticks sent before cancellation must not count toward the next run.
        while self.ticks_rx.try_recv().is_ok() {}
    }
}

impl Drop for TimerSession {
    fn drop(&mut self) {
        self.driver.stop();
    }
}
