//! Response shapes returned by collaborators.

use serde::Serialize;
use serde_json::Value;

/// Content segment of a `Converse` output message.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSegment {
    /// Generated text.
    Text(String),
    /// Any non-text block, kept as JSON for display.
    Other(Value),
}

/// Result of a `Converse` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverseReply {
    /// Content of the output message, or `None` if the response had no
    /// message output.
    pub content: Option<Vec<ContentSegment>>,
    /// The whole response rendered as JSON.
    pub raw: Value,
}

impl ConverseReply {
    /// Joins all text segments with newlines.
    ///
    /// Returns `None` when there is no output message or it has no text.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .content
            .iter()
            .flatten()
            .filter_map(|segment| match segment {
                ContentSegment::Text(text) => Some(text.as_str()),
                ContentSegment::Other(_) => None,
            })
            .collect();

        (!texts.is_empty()).then(|| texts.join("\n"))
    }
}

/// Result of an `InvokeModel` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeReply {
    /// Response payload bytes.
    pub body: Vec<u8>,
    /// `Content-Type` reported by the service.
    pub content_type: Option<String>,
}

impl InvokeReply {
    /// Decodes the payload as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns the decoding error for payloads that are not valid UTF-8.
    pub fn into_text(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body)
    }
}

/// Identity of the calling principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallerIdentity {
    /// Unique identifier of the calling entity.
    pub user_id: Option<String>,
    /// Account that owns the calling entity.
    pub account: Option<String>,
    /// ARN of the calling entity.
    pub arn: Option<String>,
}
