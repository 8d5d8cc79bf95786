//! Task list kept in sync with a key-value store.
//!
//! Every successful mutation rewrites the whole list under [`TASKS_KEY`] as a
//! JSON array.

use chrono::Utc;
use tracing::{debug, warn};

use super::task::Task;
use crate::error::DeskError;
use crate::storage::KvStore;

/// Store key holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

/// The daily planner.
pub struct Planner<S: KvStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: KvStore> Planner<S> {
    /// Load the task list from `store`.
    ///
    /// A value that does not parse is logged and treated as an empty list; it
    /// is only overwritten by the next mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn load(store: S) -> Result<Self, DeskError> {
        let tasks = match store.get(TASKS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("ignoring unreadable task list: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        };
        debug!(count = tasks.len(), "loaded planner tasks");

        Ok(Self { store, tasks })
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new open task.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` for blank text, or a store error.
    pub fn add(&mut self, text: &str) -> Result<Task, DeskError> {
        let text = validate_text(text)?;
        let task = Task::new(self.next_id(), text);
        let mut tasks = self.tasks.clone();
        tasks.push(task.clone());
        self.commit(tasks)?;
        Ok(task)
    }

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::NotFound` for an unknown id, or a store error.
    pub fn remove(&mut self, id: i64) -> Result<Task, DeskError> {
        let index = self.index_of(id)?;
        let mut tasks = self.tasks.clone();
        let task = tasks.remove(index);
        self.commit(tasks)?;
        Ok(task)
    }

    /// Flip the completed flag.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::NotFound` for an unknown id, or a store error.
    pub fn toggle_completed(&mut self, id: i64) -> Result<&Task, DeskError> {
        self.update(id, |task| task.completed = !task.completed)
    }

    /// Flip the priority flag.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::NotFound` for an unknown id, or a store error.
    pub fn toggle_priority(&mut self, id: i64) -> Result<&Task, DeskError> {
        self.update(id, |task| task.priority = !task.priority)
    }

    /// Replace a task's text.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` for blank text, `DeskError::NotFound`
    /// for an unknown id, or a store error.
    pub fn edit(&mut self, id: i64, text: &str) -> Result<&Task, DeskError> {
        let text = validate_text(text)?.to_string();
        self.update(id, move |task| task.text = text)
    }

    fn update(&mut self, id: i64, apply: impl FnOnce(&mut Task)) -> Result<&Task, DeskError> {
        let index = self.index_of(id)?;
        let mut tasks = self.tasks.clone();
        apply(&mut tasks[index]);
        self.commit(tasks)?;
        Ok(&self.tasks[index])
    }

    fn index_of(&self, id: i64) -> Result<usize, DeskError> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DeskError::NotFound(format!("task {id}")))
    }

    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(i64::MIN);
        now.max(max.saturating_add(1))
    }

    /// Store `tasks`, then adopt them. On failure the current list is kept.
    fn commit(&mut self, tasks: Vec<Task>) -> Result<(), DeskError> {
        let raw = serde_json::to_string(&tasks)?;
        self.store.set(TASKS_KEY, &raw)?;
        self.tasks = tasks;
        Ok(())
    }
}

fn validate_text(text: &str) -> Result<&str, DeskError> {
    if text.trim().is_empty() {
        return Err(DeskError::InvalidInput("Please enter a task.".to_string()));
    }
    Ok(text)
}
