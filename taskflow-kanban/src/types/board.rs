//! Board-level types: Board, Column

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use taskflow_config::{BoardConfig, ColumnTitles};

/// A column defines a workflow stage and holds its tasks in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Append a task
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index of a task within this column
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.position_of(id).is_some()
    }

    /// The done column with every task completed. An empty done column counts.
    pub fn is_celebrating(&self) -> bool {
        self.id.is_done() && self.tasks.iter().all(|t| t.completed)
    }
}

/// The kanban board: the three fixed columns in order todo → in-progress → done.
///
/// A `Board` is a value. Commands take a reference and return a new board; the
/// owner swaps its reference when the command succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    columns: Vec<Column>,
}

/// Unvalidated wire form of a board
#[derive(Deserialize)]
struct BoardSnapshot {
    columns: Vec<Column>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = KanbanError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        Board::from_columns(snapshot.columns)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_titles(&ColumnTitles::default())
    }
}

impl Board {
    /// Empty board with the default column titles
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board with custom column titles
    pub fn with_titles(titles: &ColumnTitles) -> Self {
        Self {
            columns: vec![
                Column::new(ColumnId::Todo, titles.todo.clone()),
                Column::new(ColumnId::InProgress, titles.in_progress.clone()),
                Column::new(ColumnId::Done, titles.done.clone()),
            ],
        }
    }

    /// Build the starting board described by configuration: empty, or the
    /// sample tasks dated relative to `today`
    pub fn from_config(config: &BoardConfig, today: chrono::NaiveDate) -> Self {
        if config.seed_sample {
            crate::defaults::sample_board(&config.titles, today)
        } else {
            Self::with_titles(&config.titles)
        }
    }

    /// Validate columns received from outside.
    ///
    /// Each fixed column must appear exactly once (in any order) and task ids
    /// must be unique across the board. Repeated tags are dropped.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut slots: [Option<Column>; 3] = [None, None, None];
        for column in columns {
            let slot = &mut slots[column.id.index()];
            if slot.is_some() {
                return Err(KanbanError::duplicate_id("column", column.id.as_str()));
            }
            *slot = Some(column);
        }

        let mut ordered = Vec::with_capacity(3);
        for (slot, id) in slots.into_iter().zip(ColumnId::ALL) {
            match slot {
                Some(column) => ordered.push(column),
                None => {
                    return Err(KanbanError::invalid_value(
                        "columns",
                        format!("missing column '{}'", id),
                    ))
                }
            }
        }

        let mut seen = HashSet::new();
        for column in &mut ordered {
            for task in &mut column.tasks {
                if !seen.insert(task.id.clone()) {
                    return Err(KanbanError::duplicate_id("task", task.id.as_str()));
                }
                task.dedup_tags();
            }
        }

        Ok(Self { columns: ordered })
    }

    /// Assemble from columns already in board order with unique ids
    pub(crate) fn from_parts(columns: [Column; 3]) -> Self {
        Self {
            columns: columns.into(),
        }
    }

    /// Columns in board order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        &self.columns[id.index()]
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        &mut self.columns[id.index()]
    }

    /// All tasks, column by column
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Find a task and the column holding it
    pub fn find_task(&self, id: &TaskId) -> Option<(ColumnId, &Task)> {
        self.columns
            .iter()
            .find_map(|c| c.tasks.iter().find(|t| &t.id == id).map(|t| (c.id, t)))
    }

    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.find_task(id).is_some()
    }

    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .flat_map(|c| c.tasks.iter_mut())
            .find(|t| &t.id == id)
    }
}
