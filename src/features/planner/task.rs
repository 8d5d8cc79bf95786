//! Planner task type.

use serde::{Deserialize, Serialize};

/// A to-do item in the daily planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation time in Unix milliseconds, unique within a list.
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Starred tasks are highlighted.
    #[serde(default)]
    pub priority: bool,
}

impl Task {
    #[must_use]
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority: false,
        }
    }
}
