//! Dashboard widgets.
//!
//! - Daily planner (persisted to-do list)
//! - Focus/break interval timer
//! - Age calculator
//! - BMI calculator

pub mod age;
pub mod bmi;
pub mod planner;
pub mod timer;
