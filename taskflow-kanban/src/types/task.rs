//! Task type

use super::ids::TaskId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,

    /// Ordered, unique by value
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new task with the given title and a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            due_date: None,
            completed: false,
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Add tags, skipping blanks and duplicates
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.add_tag(tag.as_ref());
        }
        self
    }

    /// Set the completed flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Append a trimmed tag. Returns false when blank or already present.
    pub(crate) fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove every tag equal to `tag`. Returns false when none matched.
    pub(crate) fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Drop repeated tags, keeping the first occurrence
    pub(crate) fn dedup_tags(&mut self) {
        let mut seen = Vec::with_capacity(self.tags.len());
        self.tags.retain(|t| {
            if seen.contains(t) {
                false
            } else {
                seen.push(t.clone());
                true
            }
        });
    }

    /// Card preview: the first `chars` characters of the description,
    /// followed by `...` when anything was cut.
    pub fn preview(&self, chars: usize) -> String {
        let mut iter = self.description.chars();
        let head: String = iter.by_ref().take(chars).collect();
        if iter.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }

    /// Due date rendered with a chrono format string, e.g. `%m/%d/%Y`.
    ///
    /// `None` when there is no due date or the format string is invalid.
    pub fn due_label(&self, format: &str) -> Option<String> {
        let date = self.due_date?;
        let mut label = String::new();
        write!(label, "{}", date.format(format)).ok()?;
        Some(label)
    }
}
