//! Configuration data structures
//!
//! Every section carries `#[serde(default)]` so a config file only needs to
//! mention the keys it overrides.

use crate::{ConfigError, ConfigResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Default number of description characters shown on a card
pub const DEFAULT_PREVIEW_CHARS: usize = 50;

/// Default due date display format (month/day/year)
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Default cap on the number of staged tag suggestions
pub const DEFAULT_MAX_SUGGESTED_TAGS: usize = 10;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskflowConfig {
    pub board: BoardConfig,
    pub suggestions: SuggestionConfig,
}

impl TaskflowConfig {
    /// Check every section, reporting the first offending key
    pub fn validate(&self) -> ConfigResult<()> {
        self.board.validate()?;
        self.suggestions.validate()
    }
}

/// Board construction and card display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Start with the sample tasks instead of an empty board
    pub seed_sample: bool,
    /// Description characters shown in a card preview
    pub preview_chars: usize,
    /// chrono format string for due date labels
    pub date_format: String,
    pub titles: ColumnTitles,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_sample: false,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            titles: ColumnTitles::default(),
        }
    }
}

impl BoardConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.preview_chars == 0 {
            return Err(ConfigError::invalid_value(
                "board.preview_chars",
                "must be greater than zero",
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "board.date_format",
                "must not be empty",
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::invalid_value(
                "board.date_format",
                format!("'{}' is not a valid chrono format string", self.date_format),
            ));
        }
        self.titles.validate()
    }
}

/// Display titles for the three fixed columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnTitles {
    pub todo: String,
    pub in_progress: String,
    pub done: String,
}

impl Default for ColumnTitles {
    fn default() -> Self {
        Self {
            todo: "To Do".to_string(),
            in_progress: "In Progress".to_string(),
            done: "Done".to_string(),
        }
    }
}

impl ColumnTitles {
    fn validate(&self) -> ConfigResult<()> {
        for (key, title) in [
            ("board.titles.todo", &self.todo),
            ("board.titles.in_progress", &self.in_progress),
            ("board.titles.done", &self.done),
        ] {
            if title.trim().is_empty() {
                return Err(ConfigError::invalid_value(key, "column title must not be blank"));
            }
        }
        Ok(())
    }
}

/// Tag suggestion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions kept from a single response
    pub max_tags: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_tags: DEFAULT_MAX_SUGGESTED_TAGS,
        }
    }
}

impl SuggestionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_tags == 0 {
            return Err(ConfigError::invalid_value(
                "suggestions.max_tags",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
