//! Built-in sample board.
//!
//! `sample_board()` reproduces the board a fresh TaskFlow session starts with
//! when `board.seed_sample` is enabled: four tasks spread across the columns,
//! due on the four days after `today`.

use chrono::{Days, NaiveDate};
use taskflow_config::ColumnTitles;

use crate::types::{Board, Column, ColumnId, Task};

fn days_after(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

/// The sample tasks, seeded relative to `today`
pub fn sample_board(titles: &ColumnTitles, today: NaiveDate) -> Board {
    let todo = Column::new(ColumnId::Todo, titles.todo.clone())
        .with_task(
            Task::new("Plan TaskFlow Kanban")
                .with_id("1")
                .with_description("Define project scope and features.")
                .with_tags(["planning"])
                .with_due_date(days_after(today, 1)),
        )
        .with_task(
            Task::new("Set up Next.js project")
                .with_id("2")
                .with_description("Initialize project with necessary dependencies.")
                .with_tags(["setup", "nextjs"])
                .with_due_date(days_after(today, 2)),
        );

    let in_progress = Column::new(ColumnId::InProgress, titles.in_progress.clone()).with_task(
        Task::new("Implement drag and drop")
            .with_id("3")
            .with_description("Enable task movement between columns.")
            .with_tags(["drag-and-drop", "ui"])
            .with_due_date(days_after(today, 3)),
    );

    let done = Column::new(ColumnId::Done, titles.done.clone()).with_task(
        Task::new("Design UI components")
            .with_id("4")
            .with_description("Create basic UI elements.")
            .with_tags(["ui", "design"])
            .with_due_date(days_after(today, 4))
            .with_completed(true),
    );

    Board::from_parts([todo, in_progress, done])
}

impl Board {
    /// The sample board with default column titles
    pub fn sample(today: NaiveDate) -> Self {
        sample_board(&ColumnTitles::default(), today)
    }
}
