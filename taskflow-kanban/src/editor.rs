//! Task editing sessions
//!
//! A [`TaskEditor`] holds the staged edits for one task while the user works
//! on it: a description, a due date, a tag being typed and the last set of
//! suggested tags. Nothing touches the board until a method that takes a
//! `&Board` is called, and those go through the regular commands.

use crate::error::{KanbanError, Result};
use crate::operation::Apply;
use crate::suggest::{SuggestError, SuggestTagsRequest, SuggestTagsResponse, TagSuggester};
use crate::task::{TagTask, UntagTask, UpdateTask};
use crate::types::{Board, TaskId};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// Staged edits for a single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEditor {
    task_id: TaskId,
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    new_tag: String,
    suggested_tags: Vec<String>,
    today: NaiveDate,
}

impl TaskEditor {
    /// Open a session seeded from the task's current values.
    ///
    /// Returns `None` when the board has no such task.
    pub fn open(board: &Board, id: &TaskId) -> Option<Self> {
        Self::open_on(board, id, Local::now().date_naive())
    }

    /// Like [`open`](Self::open) with an explicit current date
    pub fn open_on(board: &Board, id: &TaskId, today: NaiveDate) -> Option<Self> {
        let (_, task) = board.find_task(id)?;
        debug!(task_id = %id, "opened task editor");
        Some(Self {
            task_id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            new_tag: String::new(),
            suggested_tags: Vec::new(),
            today,
        })
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn new_tag(&self) -> &str {
        &self.new_tag
    }

    pub fn suggested_tags(&self) -> &[String] {
        &self.suggested_tags
    }

    /// Tags currently on the task in `board`
    pub fn current_tags<'a>(&self, board: &'a Board) -> &'a [String] {
        board
            .find_task(&self.task_id)
            .map_or(&[], |(_, task)| task.tags.as_slice())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Stage a due date. Today and earlier dates are rejected; `None` clears it.
    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) -> Result<()> {
        if let Some(date) = due_date {
            if date <= self.today {
                return Err(KanbanError::invalid_value(
                    "due_date",
                    format!("{} is not after {}", date, self.today),
                ));
            }
        }
        self.due_date = due_date;
        Ok(())
    }

    pub fn set_new_tag(&mut self, tag: impl Into<String>) {
        self.new_tag = tag.into();
    }

    /// Request built from the staged description
    pub fn suggestion_request(&self) -> SuggestTagsRequest {
        SuggestTagsRequest::new(self.description.clone())
    }

    /// Record the outcome of a suggestion request.
    ///
    /// A failure leaves the session with no suggestions.
    pub fn receive_suggestions(
        &mut self,
        result: std::result::Result<SuggestTagsResponse, SuggestError>,
    ) -> &[String] {
        match result {
            Ok(response) => {
                debug!(task_id = %self.task_id, count = response.tags.len(), "received tag suggestions");
                self.suggested_tags = response.tags;
            }
            Err(e) => {
                warn!(task_id = %self.task_id, error = %e, "tag suggestion failed");
                self.suggested_tags.clear();
            }
        }
        &self.suggested_tags
    }

    /// Ask `suggester` for tags and record the result
    pub async fn fetch_suggestions(&mut self, suggester: &dyn TagSuggester) -> &[String] {
        let request = self.suggestion_request();
        let result = suggester.suggest(&request).await;
        self.receive_suggestions(result)
    }

    /// Add the typed tag to the task, then clear the input.
    ///
    /// A blank input leaves both the board and the input as they are.
    pub fn submit_new_tag(&mut self, board: &Board) -> Result<Board> {
        let tag = self.new_tag.trim();
        if tag.is_empty() {
            return Ok(board.clone());
        }
        let next = TagTask::new(self.task_id.clone(), tag).apply(board)?;
        self.new_tag.clear();
        Ok(next)
    }

    /// Add one of the suggested tags to the task
    pub fn accept_suggestion(&self, board: &Board, tag: &str) -> Result<Board> {
        TagTask::new(self.task_id.clone(), tag).apply(board)
    }

    pub fn remove_tag(&self, board: &Board, tag: &str) -> Result<Board> {
        UntagTask::new(self.task_id.clone(), tag).apply(board)
    }

    /// Write the staged description and due date back to the task, ending
    /// the session
    pub fn commit(self, board: &Board) -> Result<Board> {
        debug!(task_id = %self.task_id, "committing task editor");
        UpdateTask::new(self.task_id, self.description)
            .with_due_date(self.due_date)
            .apply(board)
    }

    /// Discard the staged edits
    pub fn cancel(self) {
        debug!(task_id = %self.task_id, "cancelled task editor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnId;
    use async_trait::async_trait;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn board() -> Board {
        Board::sample(today())
    }

    fn editor(board: &Board) -> TaskEditor {
        TaskEditor::open_on(board, &TaskId::from("1"), today()).unwrap()
    }

    struct FixedSuggester(std::result::Result<Vec<&'static str>, &'static str>);

    #[async_trait]
    impl TagSuggester for FixedSuggester {
        async fn suggest(
            &self,
            request: &SuggestTagsRequest,
        ) -> std::result::Result<SuggestTagsResponse, SuggestError> {
            assert!(!request.description.is_empty());
            match &self.0 {
                Ok(tags) => Ok(SuggestTagsResponse::new(tags.iter().copied())),
                Err(message) => Err(SuggestError::generation(*message)),
            }
        }
    }

    #[test]
    fn test_open_seeds_from_task() {
        let board = board();
        let editor = editor(&board);
        assert_eq!(editor.title(), "Plan TaskFlow Kanban");
        assert_eq!(editor.description(), "Define project scope and features.");
        assert_eq!(editor.due_date(), NaiveDate::from_ymd_opt(2024, 5, 2));
        assert!(editor.new_tag().is_empty());
        assert!(editor.suggested_tags().is_empty());
        assert_eq!(editor.current_tags(&board), ["planning"]);
    }

    #[test]
    fn test_open_unknown_task() {
        assert!(TaskEditor::open_on(&board(), &TaskId::from("nope"), today()).is_none());
    }

    #[test]
    fn test_past_due_date_rejected() {
        let board = board();
        let mut editor = editor(&board);
        let yesterday = NaiveDate::from_ymd_opt(2024, 4, 30);
        assert!(editor.set_due_date(yesterday).unwrap_err().is_validation());
        assert_eq!(editor.due_date(), NaiveDate::from_ymd_opt(2024, 5, 2));

        assert!(editor.set_due_date(Some(today())).is_err());
        assert_eq!(editor.due_date(), NaiveDate::from_ymd_opt(2024, 5, 2));

        let tomorrow = NaiveDate::from_ymd_opt(2024, 5, 2);
        editor.set_due_date(tomorrow).unwrap();
        assert_eq!(editor.due_date(), tomorrow);
        editor.set_due_date(None).unwrap();
        assert_eq!(editor.due_date(), None);
    }

    #[test]
    fn test_commit_writes_description_and_due_date() {
        let board = board();
        let mut editor = editor(&board);
        editor.set_description("Scope agreed");
        editor.set_due_date(NaiveDate::from_ymd_opt(2024, 6, 1)).unwrap();

        let next = editor.commit(&board).unwrap();
        let (column, task) = next.find_task(&TaskId::from("1")).unwrap();
        assert_eq!(column, ColumnId::Todo);
        assert_eq!(task.description, "Scope agreed");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(task.tags, vec!["planning"]);
    }

    #[test]
    fn test_cancel_leaves_board_untouched() {
        let board = board();
        let mut editor = editor(&board);
        editor.set_description("never saved");
        editor.cancel();
        let (_, task) = board.find_task(&TaskId::from("1")).unwrap();
        assert_eq!(task.description, "Define project scope and features.");
    }

    #[test]
    fn test_submit_new_tag() {
        let board = board();
        let mut editor = editor(&board);

        editor.set_new_tag("   ");
        let same = editor.submit_new_tag(&board).unwrap();
        assert_eq!(same, board);
        assert_eq!(editor.new_tag(), "   ");

        editor.set_new_tag("  urgent ");
        let next = editor.submit_new_tag(&board).unwrap();
        assert_eq!(editor.current_tags(&next), ["planning", "urgent"]);
        assert!(editor.new_tag().is_empty());
    }

    #[test]
    fn test_remove_and_accept_tags() {
        let board = board();
        let editor = editor(&board);
        let next = editor.remove_tag(&board, "planning").unwrap();
        assert!(editor.current_tags(&next).is_empty());

        let next = editor.accept_suggestion(&next, "scope").unwrap();
        let next = editor.accept_suggestion(&next, "scope").unwrap();
        assert_eq!(editor.current_tags(&next), ["scope"]);
    }

    #[tokio::test]
    async fn test_fetch_suggestions() {
        let board = board();
        let mut editor = editor(&board);
        let suggester = FixedSuggester(Ok(vec!["scope", "roadmap"]));
        let tags = editor.fetch_suggestions(&suggester).await;
        assert_eq!(tags, ["scope", "roadmap"]);
    }

    #[tokio::test]
    async fn test_fetch_suggestions_failure_clears() {
        let board = board();
        let mut editor = editor(&board);
        editor.receive_suggestions(Ok(SuggestTagsResponse::new(["stale"])));

        let suggester = FixedSuggester(Err("service unavailable"));
        let tags = editor.fetch_suggestions(&suggester).await;
        assert!(tags.is_empty());
        assert!(editor.suggested_tags().is_empty());
    }
}
