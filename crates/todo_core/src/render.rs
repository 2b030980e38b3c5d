use crate::error::AppError;
use crate::model::TaskList;
use time::format_description::well_known::Rfc3339;

/// How a listing is rendered. The default is one `[ ] 1: description` line
/// per task.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Skip completed tasks. Remaining tasks keep their original positions.
    pub active_only: bool,
    /// Include creation time and an Active/Done status on each line.
    pub verbose: bool,
}

/// Formats the list for the terminal. Kept as an explicit function so the
/// CLI decides when and where the text goes.
pub fn format_tasks(list: &TaskList, options: ListOptions) -> Result<String, AppError> {
    let mut output = String::new();

    for (index, task) in list.tasks().iter().enumerate() {
        if options.active_only && task.done {
            continue;
        }

        let marker = if task.done { "[x] " } else { "[ ] " };
        let position = index + 1;

        if options.verbose {
            let created = task
                .created_at
                .format(&Rfc3339)
                .map_err(|err| AppError::invalid_data(err.to_string()))?;
            let status = if task.done { "Done" } else { "Active" };
            output.push_str(&format!(
                "{marker}{position}: {} | Created: {created} | Status: {status}\n",
                task.description
            ));
        } else {
            output.push_str(&format!("{marker}{position}: {}\n", task.description));
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::{ListOptions, format_tasks};
    use crate::model::TaskList;

    #[test]
    fn default_listing_shows_markers_and_positions() {
        let mut list = TaskList::new();
        list.add("Buy milk");
        list.add("Pay bills");

        let output = format_tasks(&list, ListOptions::default()).unwrap();

        assert_eq!(output, "[ ] 1: Buy milk\n[ ] 2: Pay bills\n");
    }

    #[test]
    fn completed_tasks_get_a_cross_marker() {
        let mut list = TaskList::new();
        list.add("Buy milk");
        list.add("Pay bills");
        list.complete(1).unwrap();

        let output = format_tasks(&list, ListOptions::default()).unwrap();

        assert_eq!(output, "[x] 1: Buy milk\n[ ] 2: Pay bills\n");
    }

    #[test]
    fn active_listing_keeps_original_positions() {
        let mut list = TaskList::new();
        list.add("Buy milk");
        list.add("Pay bills");
        list.complete(1).unwrap();

        let output = format_tasks(
            &list,
            ListOptions {
                active_only: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(output, "[ ] 2: Pay bills\n");
    }

    #[test]
    fn verbose_listing_includes_creation_time_and_status() {
        let mut list = TaskList::new();
        list.add("Buy milk");
        list.add("Pay bills");
        list.complete(2).unwrap();

        let output = format_tasks(
            &list,
            ListOptions {
                verbose: true,
                ..Default::default()
            },
        )
        .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[ ] 1: Buy milk | Created: "));
        assert!(lines[0].ends_with("| Status: Active"));
        assert!(lines[1].starts_with("[x] 2: Pay bills | Created: "));
        assert!(lines[1].ends_with("| Status: Done"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        let output = format_tasks(&TaskList::new(), ListOptions::default()).unwrap();

        assert!(output.is_empty());
    }
}
