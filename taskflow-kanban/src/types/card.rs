//! Card view of a task, formatted for display

use super::board::Board;
use super::ids::{ColumnId, TaskId};
use super::task::Task;
use serde::Serialize;
use taskflow_config::BoardConfig;

/// What a front end draws for one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: TaskId,
    pub column: ColumnId,
    pub title: String,
    pub preview: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    pub completed: bool,
}

impl Card {
    pub fn new(task: &Task, column: ColumnId, config: &BoardConfig) -> Self {
        Self {
            id: task.id.clone(),
            column,
            title: task.title.clone(),
            preview: task.preview(config.preview_chars),
            tags: task.tags.clone(),
            due: task.due_label(&config.date_format),
            completed: task.completed,
        }
    }
}

impl Board {
    /// Cards for every task, column by column in display order
    pub fn cards(&self, config: &BoardConfig) -> Vec<Card> {
        self.columns()
            .iter()
            .flat_map(|c| c.tasks.iter().map(move |t| Card::new(t, c.id, config)))
            .collect()
    }
}
