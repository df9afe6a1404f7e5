//! ToggleTask command

use crate::error::Result;
use crate::operation::{Apply, Operation};
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Flip a task's completed flag without moving it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToggleTask {
    /// The task ID to toggle
    pub id: TaskId,
}

impl ToggleTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for ToggleTask {
    fn verb(&self) -> &'static str {
        "toggle"
    }

    fn description(&self) -> &'static str {
        "Mark a task complete or incomplete"
    }
}

impl Apply for ToggleTask {
    fn apply(&self, board: &Board) -> Result<Board> {
        let mut next = board.clone();
        match next.task_mut(&self.id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(task_id = %self.id, completed = task.completed, "toggled completion");
                Ok(next)
            }
            None => {
                debug!(task_id = %self.id, "task not found, nothing to toggle");
                Ok(board.clone())
            }
        }
    }
}
