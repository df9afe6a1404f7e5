//! Kanban board state engine for TaskFlow
//!
//! The board is a value: three fixed columns (`todo`, `in-progress`, `done`)
//! holding tasks in display order. Every change is a command that takes the
//! current board and returns the next one, leaving the input untouched.
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskflow_kanban::{Apply, Board, ColumnId};
//! use taskflow_kanban::task::{AddTask, MoveTask, TagTask};
//!
//! # fn example() -> taskflow_kanban::Result<()> {
//! let board = Board::new();
//!
//! let add = AddTask::new("Write spec").with_id("spec");
//! let board = add.apply(&board)?;
//! let board = TagTask::new("spec", "docs").apply(&board)?;
//! let board = MoveTask::new("spec", ColumnId::Todo, ColumnId::Done).apply(&board)?;
//!
//! assert!(board.column(ColumnId::Done).is_celebrating());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Intents
//!
//! Front ends describe gestures as JSON intents. [`parse::parse_intents`]
//! accepts a single object or an array, normalizes camelCase keys and op
//! aliases, and [`apply_all`] runs them in order.
//!
//! ## Editing and suggestions
//!
//! [`TaskEditor`] stages description and due date edits for one task.
//! Tag suggestions come from any [`TagSuggester`]; [`suggest::PromptTagSuggester`]
//! builds one on top of a raw text generator.

pub mod defaults;
pub mod editor;
mod error;
pub mod intent;
mod operation;
pub mod parse;
pub mod suggest;
pub mod task;
pub mod types;

pub use editor::TaskEditor;
pub use error::{KanbanError, Result};
pub use intent::{apply_all, BoardIntent};
pub use operation::{Apply, Operation};
pub use suggest::{SuggestError, SuggestTagsRequest, SuggestTagsResponse, TagSuggester};

pub use types::{Board, Card, Column, ColumnId, Task, TaskId};
