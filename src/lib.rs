//! focusdesk - a terminal productivity dashboard
//!
//! This crate provides a daily planner, a focus/break interval timer, and age
//! and BMI calculators, as a ratatui dashboard and as CLI subcommands.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::DeskError;
