//! This module provides a local file storage for the task list
//!
//! The file holds one task per line, prefixed by its 1-based index:
//! ```text
//! 1. [D] [ ] submit report (by: 10 Feb 2025 23:59)
//! 2. [T] [X] buy milk
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::task::{Task, TaskType};
use crate::traits::TaskStore;
use crate::utils::parse_display_timestamp;

/// What is shown to the user when there is nothing stored
pub const EMPTY_LIST_MESSAGE: &str = "Task list is empty";

/// A task store backed by a text file
#[derive(Clone, Debug, PartialEq)]
pub struct FileStorage {
    backing_file: PathBuf,
}

impl FileStorage {
    pub fn new(path: &Path) -> Self {
        Self { backing_file: PathBuf::from(path) }
    }

    /// Get the path to the backing file
    pub fn path(&self) -> &Path {
        &self.backing_file
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io { path: self.backing_file.clone(), source }
    }
}

impl TaskStore for FileStorage {
    fn load(&self) -> Vec<Task> {
        let path = &self.backing_file;
        let content = match std::fs::read_to_string(path) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No task file at {:?} yet, starting with an empty list", path);
                return Vec::new();
            },
            Err(err) => {
                log::warn!("Unable to read file {:?}: {}. Starting with an empty list", path, err);
                return Vec::new();
            },
            Ok(content) => content,
        };

        match deserialize(&content) {
            Some(tasks) => {
                log::debug!("Loaded {} task(s) from {:?}", tasks.len(), path);
                tasks
            },
            None => {
                log::warn!("Invalid task file {:?}. Starting with an empty list", path);
                Vec::new()
            },
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        std::fs::write(&self.backing_file, serialize(tasks))
            .map_err(|err| self.io_error(err))?;
        log::debug!("Saved {} task(s) to {:?}", tasks.len(), self.backing_file);
        Ok(())
    }

    fn render(&self) -> Result<String, StorageError> {
        match std::fs::read_to_string(&self.backing_file) {
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(EMPTY_LIST_MESSAGE.to_string()),
            Err(err) => Err(self.io_error(err)),
            Ok(content) => Ok(render_content(&content)),
        }
    }
}

/// Format stored content for display
pub fn render_content(content: &str) -> String {
    let content = content.trim_end();
    if content.is_empty() {
        EMPTY_LIST_MESSAGE.to_string()
    } else {
        content.to_string()
    }
}

/// Write tasks in the storage format
pub fn serialize(tasks: &[Task]) -> String {
    tasks.iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}\n", i + 1, task))
        .collect()
}

/// Read tasks from the storage format.
///
/// Returns `None` if any non-blank line is malformed
pub fn deserialize(content: &str) -> Option<Vec<Task>> {
    content.lines()
        .filter(|line| line.trim().is_empty() == false)
        .map(|line| {
            let task = parse_line(line);
            if task.is_none() {
                log::debug!("Malformed task line {:?}", line);
            }
            task
        })
        .collect()
}

fn parse_line(line: &str) -> Option<Task> {
    let (index, rest) = line.split_once(". ")?;
    if index.is_empty() || index.bytes().all(|b| b.is_ascii_digit()) == false {
        return None;
    }

    let mut chars = rest.strip_prefix('[')?.chars();
    let task_type = TaskType::from_tag(chars.next()?)?;
    let mut chars = chars.as_str().strip_prefix("] [")?.chars();
    let done = match chars.next()? {
        'X' => true,
        ' ' => false,
        _ => return None,
    };
    let body = chars.as_str().strip_prefix("] ")?;

    let mut task = match task_type {
        TaskType::ToDo => Task::todo(name(body)?),
        TaskType::Deadline => {
            let (task_name, due) = body.strip_suffix(')')?.rsplit_once(" (by: ")?;
            Task::deadline(name(task_name)?, parse_display_timestamp(due)?)
        },
        TaskType::Event => {
            let (task_name, span) = body.strip_suffix(')')?.rsplit_once(" (from: ")?;
            let (start, end) = span.split_once(" to: ")?;
            Task::event(name(task_name)?, parse_display_timestamp(start)?, parse_display_timestamp(end)?).ok()?
        },
    };
    if done {
        task.mark_done();
    }
    Some(task)
}

fn name(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
