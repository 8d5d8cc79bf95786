//! Cancellable once-per-period tick source.
//!
//! The driver never touches timer state. It only sends [`Tick`] messages into a
//! channel; whoever owns the engine applies them one by one, in arrival order.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::error::DeskError;

/// One period of wall-clock time has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Handle to the background task producing ticks.
#[derive(Debug)]
pub struct TickDriver {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Create an idle driver with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    /// Create an idle driver ticking once per second.
    #[must_use]
    pub const fn per_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Spawn the periodic task on the current tokio runtime.
    ///
    /// The first tick is sent one full period after this call. Any driver
    /// already running on this handle is stopped first.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Config` if called outside a tokio runtime.
    pub fn start(&mut self, sender: UnboundedSender<Tick>) -> Result<(), DeskError> {
        self.stop();

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| DeskError::Config(format!("Tick driver needs a tokio runtime: {e}")))?;

        let period = self.period;
        self.handle = Some(runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                trace!("tick");
                if sender.send(Tick).is_err() {
                    debug!("tick receiver dropped, driver exiting");
                    break;
                }
            }
        }));

        debug!(period_ms = period.as_millis(), "tick driver started");
        Ok(())
    }

    /// Cancel the periodic task. Safe to call when nothing is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("tick driver stopped");
        }
    }

    /// Whether a periodic task is currently attached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
