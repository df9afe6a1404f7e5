//! AddTask command

use crate::error::{KanbanError, Result};
use crate::operation::{Apply, Operation};
use crate::types::{Board, ColumnId, Task, TaskId};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

fn today() -> Option<NaiveDate> {
    Some(Local::now().date_naive())
}

/// Create a new task at the end of a column.
///
/// The id and due date are fixed when the command is built, so applying the
/// same command to the same board always yields the same result.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// Id for the new task
    #[serde(default)]
    pub id: TaskId,
    /// The task title (required, must not be blank)
    pub title: String,
    /// Target column, `todo` when omitted
    #[serde(default)]
    pub column: ColumnId,
    #[serde(default)]
    pub description: String,
    /// Defaults to the current date
    #[serde(default = "today")]
    pub due_date: Option<NaiveDate>,
}

impl AddTask {
    /// Create a new AddTask command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            column: ColumnId::Todo,
            description: String::new(),
            due_date: today(),
        }
    }

    /// The id the task will have once created
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Use a caller-chosen id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Create the task in another column
    pub fn in_column(mut self, column: ColumnId) -> Self {
        self.column = column;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set or clear the due date
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn description(&self) -> &'static str {
        "Create a new task on the board"
    }
}

impl Apply for AddTask {
    fn apply(&self, board: &Board) -> Result<Board> {
        if self.title.trim().is_empty() {
            return Err(KanbanError::EmptyTitle);
        }
        if board.contains_task(&self.id) {
            return Err(KanbanError::duplicate_id("task", self.id.as_str()));
        }

        let task = Task {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            tags: Vec::new(),
            due_date: self.due_date,
            completed: false,
        };

        let mut next = board.clone();
        next.column_mut(self.column).tasks.push(task);

        info!(task_id = %self.id, column = %self.column, "created task");
        Ok(next)
    }
}
