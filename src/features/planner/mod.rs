//! Daily planner: a to-do list persisted in the key-value store.

#[allow(clippy::module_inception)]
mod planner;
mod task;

pub use planner::{Planner, TASKS_KEY};
pub use task::Task;
