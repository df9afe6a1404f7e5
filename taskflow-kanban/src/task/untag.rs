//! UntagTask command

use crate::error::Result;
use crate::operation::{Apply, Operation};
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Remove a tag from a task
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UntagTask {
    /// The task ID to untag
    pub id: TaskId,
    /// The tag value to remove
    pub tag: String,
}

impl UntagTask {
    pub fn new(id: impl Into<TaskId>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
        }
    }
}

impl Operation for UntagTask {
    fn verb(&self) -> &'static str {
        "untag"
    }

    fn description(&self) -> &'static str {
        "Remove a tag from a task"
    }
}

impl Apply for UntagTask {
    fn apply(&self, board: &Board) -> Result<Board> {
        let mut next = board.clone();
        let was_present = next
            .task_mut(&self.id)
            .map(|task| task.remove_tag(self.tag.trim()))
            .unwrap_or(false);

        if !was_present {
            debug!(task_id = %self.id, tag = %self.tag, "tag not present");
            return Ok(board.clone());
        }

        debug!(task_id = %self.id, tag = %self.tag, "untagged task");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{AddTask, TagTask};

    fn setup() -> Board {
        let board = AddTask::new("Task").with_id("t").apply(&Board::new()).unwrap();
        let board = TagTask::new("t", "ui").apply(&board).unwrap();
        TagTask::new("t", "design").apply(&board).unwrap()
    }

    fn tags(board: &Board) -> Vec<String> {
        board.find_task(&TaskId::from("t")).unwrap().1.tags.clone()
    }

    #[test]
    fn test_untag_task() {
        let board = UntagTask::new("t", "ui").apply(&setup()).unwrap();
        assert_eq!(tags(&board), vec!["design"]);
    }

    #[test]
    fn test_untag_trims_like_tag() {
        let board = TagTask::new("t", " backend ").apply(&setup()).unwrap();
        let board = UntagTask::new("t", " backend ").apply(&board).unwrap();
        assert_eq!(tags(&board), vec!["ui", "design"]);

        let board = UntagTask::new("t", "ui  ").apply(&board).unwrap();
        assert_eq!(tags(&board), vec!["design"]);
    }

    #[test]
    fn test_untag_twice_is_noop() {
        let once = UntagTask::new("t", "ui").apply(&setup()).unwrap();
        let twice = UntagTask::new("t", "ui").apply(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_untag_absent_tag_is_noop() {
        let board = setup();
        let next = UntagTask::new("t", "backend").apply(&board).unwrap();
        assert_eq!(next, board);
    }

    #[test]
    fn test_untag_unknown_task_is_noop() {
        let board = setup();
        let next = UntagTask::new("missing", "ui").apply(&board).unwrap();
        assert_eq!(next, board);
    }
}
