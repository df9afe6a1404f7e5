//! Presentation layer intents
//!
//! A presentation layer emits one intent per user gesture. Each intent wraps
//! the command it maps to and is serialized with an `op` tag:
//!
//! ```json
//! { "op": "move", "id": "01J…", "from": "todo", "to": "done" }
//! ```

use crate::error::Result;
use crate::operation::{Apply, Operation};
use crate::task::{AddTask, MoveTask, TagTask, ToggleTask, UntagTask, UpdateTask};
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A discrete user gesture
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum BoardIntent {
    Create(AddTask),
    Move(MoveTask),
    Edit(UpdateTask),
    AddTag(TagTask),
    RemoveTag(UntagTask),
    ToggleComplete(ToggleTask),
}

impl BoardIntent {
    /// The command this intent maps to
    pub fn command(&self) -> &dyn Apply {
        match self {
            Self::Create(cmd) => cmd,
            Self::Move(cmd) => cmd,
            Self::Edit(cmd) => cmd,
            Self::AddTag(cmd) => cmd,
            Self::RemoveTag(cmd) => cmd,
            Self::ToggleComplete(cmd) => cmd,
        }
    }
}

impl Operation for BoardIntent {
    fn verb(&self) -> &'static str {
        self.command().verb()
    }

    fn noun(&self) -> &'static str {
        self.command().noun()
    }

    fn description(&self) -> &'static str {
        self.command().description()
    }
}

impl Apply for BoardIntent {
    fn apply(&self, board: &Board) -> Result<Board> {
        debug!(op = %self.op_string(), "applying intent");
        self.command().apply(board)
    }
}

impl From<AddTask> for BoardIntent {
    fn from(cmd: AddTask) -> Self {
        Self::Create(cmd)
    }
}

impl From<MoveTask> for BoardIntent {
    fn from(cmd: MoveTask) -> Self {
        Self::Move(cmd)
    }
}

impl From<UpdateTask> for BoardIntent {
    fn from(cmd: UpdateTask) -> Self {
        Self::Edit(cmd)
    }
}

impl From<TagTask> for BoardIntent {
    fn from(cmd: TagTask) -> Self {
        Self::AddTag(cmd)
    }
}

impl From<UntagTask> for BoardIntent {
    fn from(cmd: UntagTask) -> Self {
        Self::RemoveTag(cmd)
    }
}

impl From<ToggleTask> for BoardIntent {
    fn from(cmd: ToggleTask) -> Self {
        Self::ToggleComplete(cmd)
    }
}

/// Apply a batch left to right.
///
/// The first failure aborts the batch; the input board is never modified, so
/// the caller simply keeps it.
pub fn apply_all(board: &Board, intents: &[BoardIntent]) -> Result<Board> {
    intents
        .iter()
        .try_fold(board.clone(), |current, intent| intent.apply(&current))
}
