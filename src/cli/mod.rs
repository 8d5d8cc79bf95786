//! Command-line surface: argument definitions and command implementations.

pub mod args;
pub mod commands;
