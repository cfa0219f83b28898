//! This module provides an in-memory task store that can be told to return errors on some tests
#![cfg(any(test, feature = "integration_tests"))]

use crate::error::StorageError;
use crate::storage::{deserialize, render_content, serialize};
use crate::task::Task;
use crate::traits::TaskStore;

/// This stores some behaviour tweaks, that describe how a mocked store will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    pub save_behaviour: (u32, u32),
    pub render_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            save_behaviour: (0, n_fails),
            render_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_save(&mut self) -> Result<(), StorageError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.save_behaviour, "save")
    }
    pub fn can_render(&mut self) -> Result<(), StorageError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.render_behaviour, "render")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), StorageError> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(StorageError::Mocked(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value)))
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}


/// A task store that keeps its content in memory, in the same format as [`FileStorage`](crate::storage::FileStorage)
#[derive(Default, Debug)]
pub struct MockStorage {
    content: Option<String>,
    behaviour: std::cell::RefCell<MockBehaviour>,
}

impl MockStorage {
    pub fn new(behaviour: MockBehaviour) -> Self {
        Self { content: None, behaviour: std::cell::RefCell::new(behaviour) }
    }

    /// Create a store that already holds some content
    pub fn with_content(content: &str, behaviour: MockBehaviour) -> Self {
        Self { content: Some(content.to_string()), behaviour: std::cell::RefCell::new(behaviour) }
    }

    /// The raw stored content, if anything has ever been stored
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn behaviour_mut(&mut self) -> &mut MockBehaviour {
        self.behaviour.get_mut()
    }
}

impl TaskStore for MockStorage {
    fn load(&self) -> Vec<Task> {
        self.content.as_deref()
            .and_then(deserialize)
            .unwrap_or_default()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        self.behaviour.get_mut().can_save()?;
        self.content = Some(serialize(tasks));
        Ok(())
    }

    fn render(&self) -> Result<String, StorageError> {
        self.behaviour.borrow_mut().can_render()?;
        Ok(render_content(self.content.as_deref().unwrap_or("")))
    }
}
