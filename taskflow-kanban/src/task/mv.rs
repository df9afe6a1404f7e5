//! MoveTask command

use crate::error::Result;
use crate::operation::{Apply, Operation};
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Move a task from one column to the end of another.
///
/// Entering `done` marks the task completed. Leaving `done` leaves the flag
/// alone; clearing it is a separate [`ToggleTask`](super::ToggleTask).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Column the task is expected to be in
    pub from: ColumnId,
    /// Destination column
    pub to: ColumnId,
}

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, from: ColumnId, to: ColumnId) -> Self {
        Self {
            id: id.into(),
            from,
            to,
        }
    }
}

impl Operation for MoveTask {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn description(&self) -> &'static str {
        "Move a task to a different column"
    }
}

impl Apply for MoveTask {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(index) = board.column(self.from).position_of(&self.id) else {
            debug!(task_id = %self.id, from = %self.from, "task not in source column, nothing to move");
            return Ok(board.clone());
        };

        let mut next = board.clone();
        let mut task = next.column_mut(self.from).tasks.remove(index);
        if self.to.is_done() {
            task.completed = true;
        }
        next.column_mut(self.to).tasks.push(task);

        info!(task_id = %self.id, from = %self.from, to = %self.to, "moved task");
        Ok(next)
    }
}
