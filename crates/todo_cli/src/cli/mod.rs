use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage a personal task list stored in a local JSON file", long_about = None)]
#[command(group(
    ArgGroup::new("operation")
        .required(true)
        .args(["add", "list", "complete", "del", "verbose", "active"])
))]
pub struct Cli {
    /// Add a task from the trailing words, or from one line on stdin
    ///
    /// Example: todo --add Buy milk
    /// Example: echo "Buy milk" | todo --add
    #[arg(long)]
    pub add: bool,

    /// Print every task with a completion marker and its position
    #[arg(long)]
    pub list: bool,

    /// Mark task N as completed
    #[arg(long, value_name = "N")]
    pub complete: Option<usize>,

    /// Remove task N from the list
    #[arg(long, value_name = "N")]
    pub del: Option<usize>,

    /// Print every task with its creation time and status
    #[arg(long)]
    pub verbose: bool,

    /// Print only tasks that are not completed
    #[arg(long)]
    pub active: bool,

    /// Task file to use instead of TODO_FILENAME or todo.json
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Words making up the task description for --add
    ///
    /// `requires = "add"` would always be satisfied by the flag's implicit
    /// `false` default, so the constraint is spelled as conflicts with every
    /// other operation flag instead; the required one-of group makes the two
    /// equivalent.
    #[arg(
        value_name = "DESCRIPTION",
        conflicts_with_all = ["list", "complete", "del", "verbose", "active"]
    )]
    pub description: Vec<String>,
}

/// The single operation a run performs, resolved from the flag group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    Complete(usize),
    Delete(usize),
    Verbose,
    Active,
}

impl Cli {
    pub fn operation(&self) -> Operation {
        if self.add {
            Operation::Add
        } else if let Some(position) = self.complete {
            Operation::Complete(position)
        } else if let Some(position) = self.del {
            Operation::Delete(position)
        } else if self.list {
            Operation::List
        } else if self.verbose {
            Operation::Verbose
        } else {
            // the arg group guarantees exactly one operation flag was given
            Operation::Active
        }
    }
}
