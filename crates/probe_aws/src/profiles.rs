//! Bedrock control-plane [`ProfileCatalog`] implementation.

use async_trait::async_trait;
use aws_sdk_bedrock::Client;
use aws_sdk_bedrock::operation::get_inference_profile::GetInferenceProfileOutput;
use probe_core::{CallError, ProfileCatalog};
use serde_json::{Value, json};

use super::error::classify;
use super::types::timestamp_to_json;

/// Inference profile lookup through `bedrock:GetInferenceProfile`.
pub struct BedrockProfiles {
    client: Client,
}

impl BedrockProfiles {
    /// Creates the lookup over a Bedrock control-plane client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileCatalog for BedrockProfiles {
    async fn describe_profile(&self, identifier: &str) -> Result<Value, CallError> {
        let output = self
            .client
            .get_inference_profile()
            .inference_profile_identifier(identifier)
            .send()
            .await
            .map_err(|err| classify("GetInferenceProfile", err))?;

        Ok(profile_to_json(&output))
    }
}

/// Renders the profile descriptor with the service's field names.
fn profile_to_json(profile: &GetInferenceProfileOutput) -> Value {
    let models: Vec<Value> = profile
        .models()
        .iter()
        .map(|model| json!({ "modelArn": model.model_arn() }))
        .collect();

    json!({
        "inferenceProfileName": profile.inference_profile_name(),
        "description": profile.description(),
        "createdAt": profile.created_at().map(timestamp_to_json),
        "updatedAt": profile.updated_at().map(timestamp_to_json),
        "inferenceProfileArn": profile.inference_profile_arn(),
        "models": models,
        "inferenceProfileId": profile.inference_profile_id(),
        "status": profile.status().as_str(),
        "type": profile.r#type().as_str(),
    })
}
