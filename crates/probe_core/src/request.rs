//! Request shapes for the two invocation strategies.

use crate::error::RequestError;
use serde::Serialize;

/// Token limit applied to both strategies.
pub const MAX_TOKENS: u32 = 128;

/// Schema tag for the Anthropic Messages body on Bedrock.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Content type and accept header for raw invocation.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single-turn `Converse` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverseRequest {
    /// Inference profile ARN or model id.
    pub model_id: String,
    /// Text of the single user message.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl ConverseRequest {
    /// Creates a request with [`MAX_TOKENS`].
    #[must_use]
    pub fn new(model_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            prompt: prompt.into(),
            max_tokens: MAX_TOKENS,
        }
    }
}

/// A raw `InvokeModel` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeRequest {
    /// Inference profile ARN or model id.
    pub model_id: String,
    /// Serialized vendor body.
    pub body: Vec<u8>,
    /// `Content-Type` of [`InvokeRequest::body`].
    pub content_type: &'static str,
    /// Expected response type.
    pub accept: &'static str,
}

impl InvokeRequest {
    /// Builds an `InvokeModel` request carrying an Anthropic Messages body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Body`] if the body cannot be serialized.
    pub fn anthropic(
        model_id: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let body = serde_json::to_vec(&AnthropicMessagesBody::single_turn(prompt))?;
        Ok(Self {
            model_id: model_id.into(),
            body,
            content_type: JSON_CONTENT_TYPE,
            accept: JSON_CONTENT_TYPE,
        })
    }
}

// -----------------------------------------------------------------------------
// Anthropic Messages body
// -----------------------------------------------------------------------------

/// Anthropic Messages API body as accepted by Bedrock `InvokeModel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnthropicMessagesBody {
    /// Schema version tag.
    pub anthropic_version: &'static str,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Conversation turns.
    pub messages: Vec<AnthropicMessage>,
}

impl AnthropicMessagesBody {
    /// Body with one user message containing one text block.
    #[must_use]
    pub fn single_turn(prompt: impl Into<String>) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user",
                content: vec![AnthropicContent::Text {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// One message turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnthropicMessage {
    /// `user` or `assistant`.
    pub role: &'static str,
    /// Content blocks.
    pub content: Vec<AnthropicContent>,
}

/// Content block of an Anthropic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContent {
    /// Plain text.
    Text {
        /// The text.
        text: String,
    },
}
