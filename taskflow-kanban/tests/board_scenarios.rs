//! End-to-end board scenarios driven through intents

use chrono::NaiveDate;
use serde_json::json;
use taskflow_kanban::parse::parse_intents;
use taskflow_kanban::task::{AddTask, MoveTask, TagTask, ToggleTask, UntagTask, UpdateTask};
use taskflow_kanban::{
    apply_all, Apply, Board, ColumnId, KanbanError, Operation, TaskEditor, TaskId,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test_log::test]
fn test_completed_survives_leaving_done() {
    let board = Board::new();
    let add = AddTask::new("Write spec").with_id("spec");
    let board = add.apply(&board).unwrap();
    let id = TaskId::from("spec");

    let board = MoveTask::new("spec", ColumnId::Todo, ColumnId::Done)
        .apply(&board)
        .unwrap();
    let (column, task) = board.find_task(&id).unwrap();
    assert_eq!(column, ColumnId::Done);
    assert!(task.completed);

    let board = MoveTask::new("spec", ColumnId::Done, ColumnId::Todo)
        .apply(&board)
        .unwrap();
    let (column, task) = board.find_task(&id).unwrap();
    assert_eq!(column, ColumnId::Todo);
    assert!(task.completed);
}

#[test_log::test]
fn test_tagging_twice_keeps_one_tag() {
    let board = Board::sample(today());
    let tag = TagTask::new("2", "urgent");
    let once = tag.apply(&board).unwrap();
    let twice = tag.apply(&once).unwrap();
    assert_eq!(once, twice);

    let (_, task) = twice.find_task(&TaskId::from("2")).unwrap();
    assert_eq!(task.tags, vec!["setup", "nextjs", "urgent"]);
}

#[test_log::test]
fn test_blank_title_is_rejected() {
    let board = Board::sample(today());
    for title in ["", "   "] {
        let result = AddTask::new(title).apply(&board);
        assert!(matches!(result, Err(KanbanError::EmptyTitle)));
    }
    assert_eq!(board.task_count(), 4);
}

#[test_log::test]
fn test_unknown_task_is_a_no_op() {
    let board = Board::sample(today());
    let ghost = "ghost";
    let commands: Vec<Box<dyn Apply>> = vec![
        Box::new(MoveTask::new(ghost, ColumnId::Todo, ColumnId::Done)),
        Box::new(UpdateTask::new(ghost, "nothing")),
        Box::new(TagTask::new(ghost, "x")),
        Box::new(UntagTask::new(ghost, "x")),
        Box::new(ToggleTask::new(ghost)),
    ];
    for command in commands {
        assert_eq!(command.apply(&board).unwrap(), board, "{}", command.op_string());
    }
}

#[test_log::test]
fn test_move_from_wrong_column_is_a_no_op() {
    let board = Board::sample(today());
    let next = MoveTask::new("3", ColumnId::Todo, ColumnId::Done)
        .apply(&board)
        .unwrap();
    assert_eq!(next, board);
}

#[test_log::test]
fn test_front_end_session() {
    let intents = parse_intents(json!([
        {"op": "create", "id": "login", "title": "Fix login", "dueDate": null},
        {"action": "addTag", "taskId": "login", "tagValue": "bug"},
        {"action": "moveTask", "taskId": "login", "fromColumn": "todo", "toColumn": "inprogress"},
        {"op": "updateDescription", "taskId": "login", "newDescription": "Session expires too early"},
        {"op": "toggle", "taskId": "login"}
    ]))
    .unwrap();

    let board = apply_all(&Board::sample(today()), &intents).unwrap();
    let (column, task) = board.find_task(&TaskId::from("login")).unwrap();
    assert_eq!(column, ColumnId::InProgress);
    assert_eq!(task.tags, vec!["bug"]);
    assert_eq!(task.description, "Session expires too early");
    assert!(task.completed);
    assert_eq!(task.due_date, None);

    let in_progress = board.column(ColumnId::InProgress);
    assert_eq!(in_progress.position_of(&TaskId::from("login")), Some(1));
}

#[test_log::test]
fn test_failed_batch_keeps_previous_board() {
    let board = Board::sample(today());
    let intents = parse_intents(json!([
        {"op": "create", "title": "Fine"},
        {"op": "create", "title": " "}
    ]))
    .unwrap();
    assert!(apply_all(&board, &intents).is_err());
    assert_eq!(board.task_count(), 4);
}

#[test_log::test]
fn test_board_survives_json_round_trip() {
    let board = Board::sample(today());
    let text = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, board);
}

#[test_log::test]
fn test_editor_session_on_sample_board() {
    let board = Board::sample(today());
    let mut editor = TaskEditor::open_on(&board, &TaskId::from("4"), today()).unwrap();

    editor.set_new_tag("polish");
    let board = editor.submit_new_tag(&board).unwrap();
    let board = editor.remove_tag(&board, "design").unwrap();
    editor.set_description("Create basic UI elements and icons.");
    let board = editor.commit(&board).unwrap();

    let (column, task) = board.find_task(&TaskId::from("4")).unwrap();
    assert_eq!(column, ColumnId::Done);
    assert_eq!(task.tags, vec!["ui", "polish"]);
    assert_eq!(task.description, "Create basic UI elements and icons.");
    assert!(board.column(ColumnId::Done).is_celebrating());
}
