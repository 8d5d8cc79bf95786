//! Focus/break interval timer.
//!
//! - `engine`: the pure countdown state machine
//! - `driver`: cancellable once-per-second tick source
//! - `session`: host layer wiring engine, driver, and cue together
//! - `cue`: generated tone played when a period ends

pub mod cue;
pub mod driver;
pub mod engine;
pub mod format;
pub mod session;

pub use cue::{Chime, SilentChime, Tone, ToneChime};
pub use driver::{Tick, TickDriver};
pub use engine::{
    IntervalTimer, PhaseComplete, TimerConfiguration, TimerError, TimerMode, TimerSnapshot,
    DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES,
};
pub use format::{format_clock, format_minutes, render_progress_bar};
pub use session::TimerSession;
