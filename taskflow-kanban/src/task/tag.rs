//! TagTask command

use crate::error::Result;
use crate::operation::{Apply, Operation};
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Add a tag to a task.
///
/// The value is trimmed. Blank values and tags the task already carries are
/// ignored without error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagTask {
    /// The task ID to tag
    pub id: TaskId,
    /// The tag value to add
    pub tag: String,
}

impl TagTask {
    pub fn new(id: impl Into<TaskId>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
        }
    }
}

impl Operation for TagTask {
    fn verb(&self) -> &'static str {
        "tag"
    }

    fn description(&self) -> &'static str {
        "Add a tag to a task"
    }
}

impl Apply for TagTask {
    fn apply(&self, board: &Board) -> Result<Board> {
        let mut next = board.clone();
        let added = next
            .task_mut(&self.id)
            .map(|task| task.add_tag(&self.tag))
            .unwrap_or(false);

        if !added {
            debug!(task_id = %self.id, tag = %self.tag, "tag not added");
            return Ok(board.clone());
        }

        debug!(task_id = %self.id, tag = %self.tag.trim(), "tagged task");
        Ok(next)
    }
}
