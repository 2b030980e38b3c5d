use crate::error::AppError;
use crate::model::TaskList;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "todo.json";
pub const STORE_ENV_VAR: &str = "TODO_FILENAME";

/// A non-blank flag value wins over the environment, which wins over the
/// default file name in the working directory.
pub fn resolve_store_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_STORE_FILE)
}

/// Reads the list at `path`. A missing file is the first-run case and yields
/// an empty list, as does a zero-byte file.
pub fn load(path: &Path) -> Result<TaskList, AppError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TaskList::new()),
        Err(err) => return Err(AppError::io(err.to_string())),
    };

    TaskList::from_json(&bytes)
}

/// Overwrites the file at `path` with the full serialized list. A crash
/// mid-write can truncate the file; there is no atomic rename.
pub fn save(path: &Path, list: &TaskList) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content = list.to_json()?;
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))
}
