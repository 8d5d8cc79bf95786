//! Command implementations for focusdesk.
//!
//! Each command returns the text to print; `main` writes it to stdout.

mod calc;
mod completions;
mod config;
mod task;
mod timer;

pub use calc::{age, bmi};
pub use completions::completions;
pub use config::config;
pub use task::task;
pub use timer::timer;
