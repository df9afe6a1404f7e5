//! Task commands

mod add;
mod complete;
mod mv;
mod tag;
mod untag;
mod update;

pub use add::AddTask;
pub use complete::ToggleTask;
pub use mv::MoveTask;
pub use tag::TagTask;
pub use untag::UntagTask;
pub use update::UpdateTask;
