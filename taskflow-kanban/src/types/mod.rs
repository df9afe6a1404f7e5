//! Core types for the kanban board

mod board;
mod card;
mod ids;
mod task;

pub use board::{Board, Column};
pub use card::Card;
pub use ids::{ColumnId, TaskId};
pub use task::Task;
