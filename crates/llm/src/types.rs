//! Wire types for the Anthropic Messages API.
//!
//! Only the subset of the API this application uses is modeled: a single
//! user message whose content is either plain text or a base64 PDF
//! document block (with citations enabled) followed by the question text.
//! Response decoding is deliberately lenient — unknown block types and
//! unknown citation fields are tolerated rather than rejected.

use serde::{Deserialize, Serialize};

/// Messages API request.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    /// Model identifier (e.g., "claude-3-5-sonnet-20241022")
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Conversation messages (this application always sends exactly one)
    pub messages: Vec<Message>,
}

impl MessagesRequest {
    /// Build a plain-text request (used for ranking and evaluation prompts).
    pub fn text(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: 1024,
            temperature: None,
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![ContentBlock::Text {
                    text: prompt.into(),
                }],
            }],
        }
    }

    /// Build a document question request: one base64 PDF block with
    /// citations enabled, followed by the question text.
    pub fn document(
        title: impl Into<String>,
        data: impl Into<String>,
        question: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens: 1024,
            temperature: None,
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentBlock::Document {
                        source: DocumentSource {
                            source_type: "base64".to_string(),
                            media_type: "application/pdf".to_string(),
                            data: data.into(),
                        },
                        title: title.into(),
                        citations: CitationsConfig { enabled: true },
                    },
                    ContentBlock::Text {
                        text: question.into(),
                    },
                ],
            }],
        }
    }

    /// Set the temperature for sampling.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A single conversation message.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

/// Request content block.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text block
    Text { text: String },

    /// Base64-encoded document block with citation support
    Document {
        source: DocumentSource,
        title: String,
        citations: CitationsConfig,
    },
}

/// Base64 document source.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub media_type: String,
    pub data: String,
}

/// Citation feature flag on a document block.
#[derive(Debug, Clone, Serialize)]
pub struct CitationsConfig {
    pub enabled: bool,
}

/// Messages API response.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ResponseBlock>,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub usage: Usage,
}

impl MessagesResponse {
    /// Text of the first text block, if any.
    pub fn first_text(&self) -> Option<String> {
        self.content.iter().find_map(|block| match block {
            ResponseBlock::Text { text, .. } => Some(text.clone()),
            ResponseBlock::Other => None,
        })
    }
}

/// Response content block. Non-text block types (tool use, thinking, …)
/// are decoded as `Other` and skipped by callers.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResponseBlock {
    Text {
        text: String,
        #[serde(default)]
        citations: Option<Vec<Citation>>,
    },

    #[serde(other)]
    Other,
}

/// Citation metadata attached to a span of generated text.
///
/// The API returns more fields than these (char offsets, page numbers);
/// only the ones rendered into citation markers are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub cited_text: String,

    #[serde(default)]
    pub document_title: Option<String>,

    #[serde(default)]
    pub document_index: Option<u64>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u32,

    #[serde(default)]
    pub output_tokens: u32,
}
