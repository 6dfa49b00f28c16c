//! Bedrock to probe response conversions.

use super::types::document_to_json;
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use aws_sdk_bedrockruntime::types as bedrock;
use probe_core::{ContentSegment, ConverseReply};
use serde_json::{Value, json};

/// Converts a Bedrock converse response into a [`ConverseReply`].
pub fn convert_response(response: ConverseOutput) -> ConverseReply {
    let raw = response_to_json(&response);

    let content = match response.output {
        Some(bedrock::ConverseOutput::Message(msg)) => Some(
            msg.content
                .into_iter()
                .map(convert_content_block)
                .collect(),
        ),
        Some(unexpected) => {
            tracing::warn!("unexpected output type {unexpected:?} from Bedrock");
            None
        }
        None => None,
    };

    ConverseReply { content, raw }
}

/// Converts a content block into a [`ContentSegment`].
pub fn convert_content_block(block: bedrock::ContentBlock) -> ContentSegment {
    match block {
        bedrock::ContentBlock::Text(text) => ContentSegment::Text(text),
        other => ContentSegment::Other(content_block_to_json(&other)),
    }
}

fn response_to_json(response: &ConverseOutput) -> Value {
    json!({
        "output": response.output.as_ref().map(output_to_json),
        "stopReason": response.stop_reason.as_str(),
        "usage": response.usage.as_ref().map(|usage| json!({
            "inputTokens": usage.input_tokens,
            "outputTokens": usage.output_tokens,
            "totalTokens": usage.total_tokens,
        })),
        "metrics": response.metrics.as_ref().map(|metrics| json!({
            "latencyMs": metrics.latency_ms,
        })),
    })
}

fn output_to_json(output: &bedrock::ConverseOutput) -> Value {
    match output {
        bedrock::ConverseOutput::Message(msg) => json!({
            "message": {
                "role": msg.role.as_str(),
                "content": msg.content.iter().map(content_block_to_json).collect::<Vec<_>>(),
            }
        }),
        other => json!({ "unknown": format!("{other:?}") }),
    }
}

fn content_block_to_json(block: &bedrock::ContentBlock) -> Value {
    match block {
        bedrock::ContentBlock::Text(text) => json!({ "text": text }),
        bedrock::ContentBlock::ToolUse(tool_use) => json!({
            "toolUse": {
                "toolUseId": tool_use.tool_use_id,
                "name": tool_use.name,
                "input": document_to_json(&tool_use.input),
            }
        }),
        other => json!({ "unknown": format!("{other:?}") }),
    }
}
