//! Prompt-driven tag suggestions over a raw text generator

use super::{SuggestError, SuggestTagsRequest, SuggestTagsResponse, TagSuggester};
use async_trait::async_trait;
use serde_json::Value;
use taskflow_config::{SuggestionConfig, DEFAULT_MAX_SUGGESTED_TAGS};
use tracing::debug;

/// Liquid template sent to the text generator
pub const SUGGEST_TAGS_TEMPLATE: &str = "Suggest relevant tags for the following task description.  Return a simple JSON array of strings.

Description: {{ description }}

Tags:";

/// A text-in, text-out language model
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, SuggestError>;
}

/// [`TagSuggester`] that renders [`SUGGEST_TAGS_TEMPLATE`], sends it to a
/// [`TextGenerator`] and parses the JSON it answers with
pub struct PromptTagSuggester<G> {
    generator: G,
    max_tags: usize,
}

impl<G: TextGenerator> PromptTagSuggester<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            max_tags: DEFAULT_MAX_SUGGESTED_TAGS,
        }
    }

    pub fn from_config(generator: G, config: &SuggestionConfig) -> Self {
        Self::new(generator).with_max_tags(config.max_tags)
    }

    /// Keep at most `max_tags` suggestions (at least one)
    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags.max(1);
        self
    }

    /// Render the prompt for a request
    pub fn render_prompt(&self, request: &SuggestTagsRequest) -> Result<String, SuggestError> {
        let template = liquid::ParserBuilder::with_stdlib()
            .build()
            .and_then(|parser| parser.parse(SUGGEST_TAGS_TEMPLATE))
            .map_err(|e| SuggestError::Template {
                message: e.to_string(),
            })?;

        let description =
            liquid::model::to_value(&request.description).map_err(|e| SuggestError::Template {
                message: e.to_string(),
            })?;
        let mut globals = liquid::Object::new();
        globals.insert("description".into(), description);

        template.render(&globals).map_err(|e| SuggestError::Template {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl<G: TextGenerator> TagSuggester for PromptTagSuggester<G> {
    async fn suggest(
        &self,
        request: &SuggestTagsRequest,
    ) -> Result<SuggestTagsResponse, SuggestError> {
        let prompt = self.render_prompt(request)?;
        let raw = self.generator.generate(&prompt).await?;
        let tags = parse_suggestions(&raw, self.max_tags)?;
        debug!(count = tags.len(), "parsed tag suggestions");
        Ok(SuggestTagsResponse { tags })
    }
}

/// Parse generator output into tags.
///
/// Accepts a JSON array of strings or an object with a `tags` array, bare or
/// inside a Markdown code fence, optionally surrounded by chatter. Tags are
/// trimmed, blanks dropped, repeats removed (first wins), and the list is cut
/// at `max_tags`.
pub fn parse_suggestions(raw: &str, max_tags: usize) -> Result<Vec<String>, SuggestError> {
    let body = strip_code_fence(raw.trim());
    let value = serde_json::from_str::<Value>(body)
        .or_else(|_| extract_array(body))
        .map_err(|e| SuggestError::malformed(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("tags") {
            Some(Value::Array(items)) => items,
            _ => return Err(SuggestError::malformed("object has no 'tags' array")),
        },
        other => {
            return Err(SuggestError::malformed(format!(
                "expected a JSON array, got {}",
                other
            )))
        }
    };

    let mut tags: Vec<String> = Vec::new();
    for item in items {
        let tag = match item {
            Value::String(tag) => tag,
            other => return Err(SuggestError::malformed(format!("non-string tag: {}", other))),
        };
        let tag = tag.trim();
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
        if tags.len() >= max_tags {
            break;
        }
    }
    Ok(tags)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Fall back to the outermost `[...]` span
fn extract_array(text: &str) -> Result<Value, serde_json::Error> {
    let start = text.find('[').unwrap_or(0);
    let end = text.rfind(']').map_or(text.len(), |i| i + 1);
    serde_json::from_str(text.get(start..end).unwrap_or(text))
}
