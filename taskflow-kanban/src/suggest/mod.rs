//! Tag suggestion seam
//!
//! Suggestions come from an external text-generation service. The board never
//! calls it directly: an editor session asks a [`TagSuggester`] for tags and
//! stages the answer for the user to accept one by one.

mod prompt;

pub use prompt::{parse_suggestions, PromptTagSuggester, TextGenerator, SUGGEST_TAGS_TEMPLATE};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input to a suggestion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestTagsRequest {
    /// The description of the task for which to suggest tags
    pub description: String,
}

impl SuggestTagsRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Suggested tags, most relevant first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestTagsResponse {
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SuggestTagsResponse {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// A suggestion request failed. No partial result is ever returned.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The generation service failed or was unreachable
    #[error("tag generation failed: {message}")]
    Generation { message: String },

    /// The service answered with something that is not a list of tags
    #[error("malformed suggestion response: {message}")]
    MalformedResponse { message: String },

    /// The prompt could not be rendered
    #[error("prompt template error: {message}")]
    Template { message: String },
}

impl SuggestError {
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Proposes tags for a task description
#[async_trait]
pub trait TagSuggester: Send + Sync {
    async fn suggest(
        &self,
        request: &SuggestTagsRequest,
    ) -> Result<SuggestTagsResponse, SuggestError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_shape() {
        let response: SuggestTagsResponse =
            serde_json::from_value(serde_json::json!({"tags": ["a", "b"]})).unwrap();
        assert_eq!(response, SuggestTagsResponse::new(["a", "b"]));

        let empty: SuggestTagsResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.tags.is_empty());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SuggestError::generation("timeout").to_string(),
            "tag generation failed: timeout"
        );
    }
}
