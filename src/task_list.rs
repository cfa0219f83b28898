//! The task list and the operations users apply to it

use crate::error::CommandError;
use crate::task::Task;
use crate::utils::comparison::compare_tasks;

const MISSING_TASK: &str = "Task of this number does not exist";

/// The result of an operation on a [`TaskList`]
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The list has been modified and should be persisted
    Changed(String),
    /// The list is left untouched
    Unchanged(String),
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        matches!(self, Outcome::Changed(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Changed(msg) | Outcome::Unchanged(msg) => msg,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Outcome::Changed(msg) | Outcome::Unchanged(msg) => msg,
        }
    }
}

/// An ordered list of tasks, with no duplicates
///
/// Tasks are kept in the order defined by [`compare_tasks`], and are addressed by users with 1-based indices.
#[derive(Clone, Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from tasks in any order, e.g. tasks that have just been loaded.
    /// Duplicates are dropped.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut list = Self::new();
        for task in tasks {
            if list.tasks.contains(&task) {
                log::warn!("Ignoring duplicated task {}", task);
                continue;
            }
            list.tasks.push(task);
        }
        list.sort();
        list
    }

    pub fn len(&self) -> usize       { self.tasks.len() }
    pub fn is_empty(&self) -> bool   { self.tasks.is_empty() }
    pub fn tasks(&self) -> &[Task]   { &self.tasks }
    pub fn iter(&self) -> impl Iterator<Item = &Task> { self.tasks.iter() }

    fn sort(&mut self) {
        self.tasks.sort_by(compare_tasks);
    }

    fn count_line(&self) -> String {
        format!("Now you have {} task(s) in the list", self.tasks.len())
    }

    /// Convert a 1-based index into a position in `self.tasks`
    fn position(&self, index: usize) -> Option<usize> {
        if index == 0 || index > self.tasks.len() {
            log::debug!("Task #{} does not exist ({} tasks)", index, self.tasks.len());
            return None;
        }
        Some(index - 1)
    }

    /// Insert a task at its place in the list.
    ///
    /// Returns [`CommandError::DuplicateTask`] if an equal task is already there
    pub fn add(&mut self, task: Task) -> Result<Outcome, CommandError> {
        if self.tasks.contains(&task) {
            return Err(CommandError::DuplicateTask);
        }
        let added = task.clone();
        self.tasks.push(task);
        self.sort();

        let position = self.tasks.iter()
            .position(|t| t == &added)
            .map_or(self.tasks.len(), |pos| pos + 1);
        log::debug!("Added {} at position {}", added, position);

        Ok(Outcome::Changed(format!("Added task {}: {}\n{}", position, added, self.count_line())))
    }

    /// Remove the task at a 1-based index
    pub fn delete(&mut self, index: usize) -> Outcome {
        let pos = match self.position(index) {
            None => return Outcome::Unchanged(MISSING_TASK.to_string()),
            Some(pos) => pos,
        };
        let removed = self.tasks.remove(pos);
        Outcome::Changed(format!("Deleted task: {}\n{}", removed, self.count_line()))
    }

    /// Mark the task at a 1-based index as done
    pub fn mark(&mut self, index: usize) -> Outcome {
        match self.position(index) {
            None => Outcome::Unchanged(MISSING_TASK.to_string()),
            Some(pos) => {
                let task = &mut self.tasks[pos];
                task.mark_done();
                Outcome::Changed(format!("Alright! This task is done: {}", task))
            },
        }
    }

    /// Mark the task at a 1-based index as not done
    pub fn unmark(&mut self, index: usize) -> Outcome {
        match self.position(index) {
            None => Outcome::Unchanged(MISSING_TASK.to_string()),
            Some(pos) => {
                let task = &mut self.tasks[pos];
                task.mark_undone();
                Outcome::Changed(format!("Okay! This task is not done: {}", task))
            },
        }
    }

    /// List the tasks whose name contains `keyword`, with their index in the list
    pub fn find(&self, keyword: &str) -> String {
        let matches: Vec<String> = self.tasks.iter()
            .enumerate()
            .filter(|(_, task)| task.name().contains(keyword))
            .map(|(pos, task)| format!("\t{}. {}", pos + 1, task))
            .collect();

        if matches.is_empty() {
            return String::from("There are no matching tasks in the list");
        }
        format!("Here are the matching task(s):\n{}", matches.join("\n"))
    }
}
