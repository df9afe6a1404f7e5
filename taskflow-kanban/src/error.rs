//! Error types for the board state manager

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations.
///
/// Lookups that miss (unknown task on move, tag, edit, toggle) are not errors;
/// those commands return the board unchanged.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Task title was empty or whitespace only
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Parse error
    #[error("parse error: {message}")]
    Parse { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Validation errors are reported back to the initiating interaction
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle | Self::InvalidValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::duplicate_id("task", "abc123");
        assert_eq!(err.to_string(), "duplicate task ID: abc123");
        assert_eq!(
            KanbanError::EmptyTitle.to_string(),
            "task title must not be empty"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = KanbanError::parse("unexpected token");
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_is_validation() {
        assert!(KanbanError::EmptyTitle.is_validation());
        assert!(KanbanError::invalid_value("due_date", "in the past").is_validation());
        assert!(!KanbanError::parse("x").is_validation());
    }
}
