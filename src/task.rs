//! Tasks (to-dos, deadlines and events)

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

use crate::error::CommandError;
use crate::utils::format_timestamp;

/// The three shapes a task can take
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskType {
    ToDo,
    Deadline,
    Event,
}

impl TaskType {
    /// The name used to sort tasks by type
    pub fn name(&self) -> &'static str {
        match self {
            TaskType::ToDo => "ToDo",
            TaskType::Deadline => "Deadline",
            TaskType::Event => "Event",
        }
    }

    /// The letter shown in the first bracketed field of a rendered task
    pub fn tag(&self) -> char {
        match self {
            TaskType::ToDo => 'T',
            TaskType::Deadline => 'D',
            TaskType::Event => 'E',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'T' => Some(TaskType::ToDo),
            'D' => Some(TaskType::Deadline),
            'E' => Some(TaskType::Event),
            _ => None,
        }
    }
}

impl Display for TaskType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Variant-specific data of a [`Task`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskKind {
    ToDo,
    Deadline { due: NaiveDateTime },
    /// `start` is never after `end`
    Event { start: NaiveDateTime, end: NaiveDateTime },
}

/// A task of the list
///
/// Two tasks are equal when they have the same variant, the same name and the same
/// timestamps. Their completion status is not taken into account.
#[derive(Clone, Debug)]
pub struct Task {
    name: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a to-do that is not done yet
    pub fn todo(name: String) -> Self {
        Self { name, done: false, kind: TaskKind::ToDo }
    }

    /// Create a task due at a given time
    pub fn deadline(name: String, due: NaiveDateTime) -> Self {
        Self { name, done: false, kind: TaskKind::Deadline { due } }
    }

    /// Create an event spanning `start..=end`.
    ///
    /// Returns [`CommandError::InvalidEventRange`] if `start` is after `end`
    pub fn event(name: String, start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, CommandError> {
        if start > end {
            return Err(CommandError::InvalidEventRange);
        }
        Ok(Self { name, done: false, kind: TaskKind::Event { start, end } })
    }

    pub fn name(&self) -> &str      { &self.name }
    pub fn is_done(&self) -> bool   { self.done }
    pub fn kind(&self) -> &TaskKind { &self.kind }

    pub fn task_type(&self) -> TaskType {
        match self.kind {
            TaskKind::ToDo => TaskType::ToDo,
            TaskKind::Deadline { .. } => TaskType::Deadline,
            TaskKind::Event { .. } => TaskType::Event,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.task_type().name()
    }

    /// The due date of a deadline, or the start of an event
    pub fn date(&self) -> Option<&NaiveDateTime> {
        match &self.kind {
            TaskKind::ToDo => None,
            TaskKind::Deadline { due } => Some(due),
            TaskKind::Event { start, .. } => Some(start),
        }
    }

    /// The end of an event
    pub fn end_date(&self) -> Option<&NaiveDateTime> {
        match &self.kind {
            TaskKind::Event { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn mark_done(&mut self) {
        log::trace!("Marking {:?} as done", self.name);
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        log::trace!("Marking {:?} as not done", self.name);
        self.done = false;
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}
impl Eq for Task {}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let completion = if self.done { 'X' } else { ' ' };
        write!(f, "[{}] [{}] {}", self.task_type().tag(), completion, self.name)?;
        match &self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", format_timestamp(due)),
            TaskKind::Event { start, end } => write!(f, " (from: {} to: {})", format_timestamp(start), format_timestamp(end)),
        }
    }
}
