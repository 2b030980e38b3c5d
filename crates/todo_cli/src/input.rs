use std::io::BufRead;
use todo_core::error::AppError;

/// Captures the task description: argument words joined by spaces win, and
/// with no words a single line is read from `reader` (stdin in practice).
/// A blank line is a usage error, not an empty task.
pub fn read_task_input<R: BufRead>(mut reader: R, args: &[String]) -> Result<String, AppError> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|err| AppError::io(err.to_string()))?;

    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("task cannot be blank"));
    }

    Ok(trimmed.to_string())
}
