//! Logging setup.
//!
//! Commands log to stderr. The dashboard owns the terminal, so it logs to
//! `logs/focusdesk.log` instead. `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Paths;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "focusdesk=debug,warn"
    } else {
        "warn"
    }
}

/// Initialize the global subscriber.
///
/// Falls back to stderr if the log file cannot be opened.
pub fn init(target: LogTarget, verbose: bool, paths: &Paths) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    if target == LogTarget::File {
        let log_path = paths.log_file();
        let file = paths.ensure_dirs().ok().and_then(|()| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .ok()
        });

        if let Some(file) = file {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
            tracing::debug!(log_file = ?log_path, "logging initialized");
            return;
        }
        eprintln!(
            "Failed to open log file {}, logging to stderr",
            log_path.display()
        );
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("focusdesk=debug"));
    }
}
