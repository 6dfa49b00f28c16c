//! Probe to Bedrock request conversions.

use aws_sdk_bedrockruntime::types as bedrock;
use probe_core::{ConverseRequest, RequestError};

/// Builds the single user message of a `Converse` request.
pub fn convert_message(request: &ConverseRequest) -> Result<bedrock::Message, RequestError> {
    bedrock::Message::builder()
        .role(bedrock::ConversationRole::User)
        .content(bedrock::ContentBlock::Text(request.prompt.clone()))
        .build()
        .map_err(|err| RequestError::Build {
            what: "message",
            detail: err.to_string(),
        })
}

/// Builds the inference configuration carrying the token limit.
pub fn build_inference_config(request: &ConverseRequest) -> bedrock::InferenceConfiguration {
    let max_tokens = i32::try_from(request.max_tokens).unwrap_or(i32::MAX);
    bedrock::InferenceConfiguration::builder()
        .max_tokens(max_tokens)
        .build()
}
