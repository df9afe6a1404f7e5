//! UpdateTask command

use crate::error::Result;
use crate::operation::{Apply, Operation};
use crate::types::{Board, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Replace a task's description and due date.
///
/// The due date is replaced as given, so `None` clears it. Tags, completion
/// and column membership are untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New description
    #[serde(default)]
    pub description: String,
    /// New due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            due_date: None,
        }
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

impl Operation for UpdateTask {
    fn verb(&self) -> &'static str {
        "update"
    }

    fn description(&self) -> &'static str {
        "Update a task's description and due date"
    }
}

impl Apply for UpdateTask {
    fn apply(&self, board: &Board) -> Result<Board> {
        let mut next = board.clone();
        match next.task_mut(&self.id) {
            Some(task) => {
                task.description = self.description.clone();
                task.due_date = self.due_date;
                debug!(task_id = %self.id, "updated task description");
                Ok(next)
            }
            None => {
                debug!(task_id = %self.id, "task not found, nothing to update");
                Ok(board.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{AddTask, MoveTask, TagTask};
    use crate::types::ColumnId;

    fn setup() -> Board {
        let board = AddTask::new("Task").with_id("t").apply(&Board::new()).unwrap();
        let board = TagTask::new("t", "keep").apply(&board).unwrap();
        MoveTask::new("t", ColumnId::Todo, ColumnId::Done)
            .apply(&board)
            .unwrap()
    }

    #[test]
    fn test_update_task_description() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let next = UpdateTask::new("t", "New description")
            .with_due_date(Some(date))
            .apply(&setup())
            .unwrap();

        let (column, task) = next.find_task(&TaskId::from("t")).unwrap();
        assert_eq!(task.description, "New description");
        assert_eq!(task.due_date, Some(date));
        assert_eq!(task.tags, vec!["keep"]);
        assert!(task.completed);
        assert_eq!(column, ColumnId::Done);
    }

    #[test]
    fn test_update_without_due_date_clears_it() {
        let board = setup();
        assert!(board.find_task(&TaskId::from("t")).unwrap().1.due_date.is_some());

        let next = UpdateTask::new("t", "x").apply(&board).unwrap();
        assert!(next.find_task(&TaskId::from("t")).unwrap().1.due_date.is_none());
    }

    #[test]
    fn test_update_unknown_task_is_noop() {
        let board = setup();
        let next = UpdateTask::new("missing", "x").apply(&board).unwrap();
        assert_eq!(next, board);
    }
}
