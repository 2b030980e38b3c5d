//! Load-mutate-save compositions over an explicit store path. Each function
//! performs exactly one logical operation and persists only after the
//! in-memory mutation succeeded, so a rejected position never touches the
//! file.

use crate::error::AppError;
use crate::model::{Task, TaskList};
use crate::storage::json_store;
use std::path::Path;

pub fn add_task(path: &Path, description: &str) -> Result<Task, AppError> {
    let mut list = json_store::load(path)?;
    let task = list.add(description).clone();
    json_store::save(path, &list)?;

    Ok(task)
}

pub fn complete_task(path: &Path, position: usize) -> Result<Task, AppError> {
    let mut list = json_store::load(path)?;
    let task = list.complete(position)?.clone();
    json_store::save(path, &list)?;

    Ok(task)
}

pub fn delete_task(path: &Path, position: usize) -> Result<Task, AppError> {
    let mut list = json_store::load(path)?;
    let task = list.delete(position)?;
    json_store::save(path, &list)?;

    Ok(task)
}

/// Read-only; never writes the store back.
pub fn list_tasks(path: &Path) -> Result<TaskList, AppError> {
    json_store::load(path)
}
