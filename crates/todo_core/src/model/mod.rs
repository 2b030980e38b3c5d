mod list;
mod task;

pub use list::TaskList;
pub use task::Task;
