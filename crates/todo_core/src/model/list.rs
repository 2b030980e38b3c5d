use crate::error::AppError;
use crate::model::Task;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Ordered collection of tasks. Positions are 1-based and follow insertion
/// order; there is no other ordering. Serializes as a bare JSON array so the
/// store files stay compatible with the original tool.
///
/// Not safe for concurrent use; one invocation owns one list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a pending task stamped with the current time. Empty
    /// descriptions are allowed here; input validation belongs to the caller.
    pub fn add<D: Into<String>>(&mut self, description: D) -> &Task {
        self.tasks.push(Task::new(description));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn complete(&mut self, position: usize) -> Result<&Task, AppError> {
        let index = self.index_for(position)?;
        let task = &mut self.tasks[index];
        task.done = true;
        task.completed_at = Some(OffsetDateTime::now_utc());
        Ok(&self.tasks[index])
    }

    /// Removes the task at `position`, shifting later tasks one position
    /// earlier.
    pub fn delete(&mut self, position: usize) -> Result<Task, AppError> {
        let index = self.index_for(position)?;
        Ok(self.tasks.remove(index))
    }

    fn index_for(&self, position: usize) -> Result<usize, AppError> {
        if position == 0 || position > self.tasks.len() {
            return Err(AppError::position(position));
        }
        Ok(position - 1)
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|err| AppError::invalid_data(err.to_string()))
    }

    /// Replaces the list from serialized bytes. Zero bytes mean an empty
    /// list, not an error.
    pub fn from_json(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_slice(bytes).map_err(|err| AppError::invalid_data(err.to_string()))
    }
}
