//! Command traits.
//!
//! Commands are structs where the fields ARE the parameters. Each one names
//! itself with a verb/noun pair and turns a board into the next board.

use crate::error::Result;
use crate::types::Board;

/// Operation metadata
pub trait Operation {
    fn verb(&self) -> &'static str;

    fn noun(&self) -> &'static str {
        "task"
    }

    /// Human readable summary of what the command does
    fn description(&self) -> &'static str;

    /// Canonical op string, e.g. `"move task"`
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// A board transition.
///
/// `apply` never mutates its input. On success the caller replaces its board
/// with the returned one; on error the caller keeps the board it had.
pub trait Apply: Operation {
    fn apply(&self, board: &Board) -> Result<Board>;
}
