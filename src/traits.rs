use crate::error::StorageError;
use crate::task::Task;

/// A place where the task list is persisted between sessions
pub trait TaskStore {
    /// Returns the stored tasks, in the order they were stored.
    /// A missing or unreadable store yields an empty list.
    fn load(&self) -> Vec<Task>;

    /// Replace the whole stored content with `tasks`
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;

    /// Returns the stored content as it should be shown to the user
    fn render(&self) -> Result<String, StorageError>;
}
