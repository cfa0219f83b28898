//! Utilities to compare tasks
//!
//! These define the canonical order of a [`TaskList`](crate::task_list::TaskList)

use std::cmp::Ordering;

use crate::task::Task;

/// Compare two tasks by type name, then date (due date or start), then end date, then name.
///
/// Type names compare alphabetically, which puts deadlines first, then events, then to-dos.
pub fn compare_tasks(left: &Task, right: &Task) -> Ordering {
    left.type_name().cmp(right.type_name())
        .then_with(|| left.date().cmp(&right.date()))
        .then_with(|| left.end_date().cmp(&right.end_date()))
        .then_with(|| left.name().cmp(right.name()))
}
