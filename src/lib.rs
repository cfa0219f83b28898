//! This crate provides a conversational to-do list assistant.
//!
//! Users type short commands (`todo buy milk`, `deadline report /by 10-02-2025 2359`, `mark 2`...).
//! These are interpreted by the [`parser`] module, applied to a [`TaskList`](task_list::TaskList),
//! and answered with a confirmation text.
//!
//! An [`Assistant`] glues everything together: it owns the task list for a whole session and
//! writes it to a [`TaskStore`](traits::TaskStore) (usually a [`FileStorage`](storage::FileStorage)) after every change.

pub mod traits;

mod task;
pub use task::{Task, TaskKind, TaskType};
pub mod task_list;
pub use task_list::TaskList;
pub mod parser;
pub mod assistant;
pub use assistant::Assistant;

pub mod storage;
pub mod mock_behaviour;

pub mod config;
pub mod error;
pub mod utils;
