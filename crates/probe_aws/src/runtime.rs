//! Bedrock runtime [`ModelRuntime`] implementation.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use probe_core::{
    CallError, ConverseReply, ConverseRequest, InvokeReply, InvokeRequest, ModelRuntime,
};
use std::sync::Arc;

use super::error::classify;
use super::request::{build_inference_config, convert_message};
use super::response::convert_response;

const CONVERSE: &str = "Converse";
const INVOKE_MODEL: &str = "InvokeModel";

/// Bedrock runtime client exposing `Converse` and `InvokeModel`.
pub struct BedrockRuntime {
    client: Arc<Client>,
}

impl BedrockRuntime {
    /// Creates a runtime over an already-initialized client.
    #[must_use]
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelRuntime for BedrockRuntime {
    async fn converse(&self, request: ConverseRequest) -> Result<ConverseReply, CallError> {
        let message = convert_message(&request).map_err(|source| CallError::Request {
            operation: CONVERSE,
            source,
        })?;

        let response = self
            .client
            .converse()
            .model_id(&request.model_id)
            .messages(message)
            .inference_config(build_inference_config(&request))
            .send()
            .await
            .map_err(|err| classify(CONVERSE, err))?;

        Ok(convert_response(response))
    }

    async fn invoke_model(&self, request: InvokeRequest) -> Result<InvokeReply, CallError> {
        let response = self
            .client
            .invoke_model()
            .model_id(request.model_id)
            .content_type(request.content_type)
            .accept(request.accept)
            .body(Blob::new(request.body))
            .send()
            .await
            .map_err(|err| classify(INVOKE_MODEL, err))?;

        let content_type = response.content_type().to_owned();
        Ok(InvokeReply {
            body: response.body.into_inner(),
            content_type: Some(content_type),
        })
    }
}
