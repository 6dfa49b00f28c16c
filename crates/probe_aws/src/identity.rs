//! STS [`IdentityCheck`] implementation.

use async_trait::async_trait;
use aws_sdk_sts::Client;
use probe_core::{CallError, CallerIdentity, IdentityCheck};

use super::error::classify;

/// Caller identity lookup through `sts:GetCallerIdentity`.
pub struct StsIdentity {
    client: Client,
}

impl StsIdentity {
    /// Creates the lookup over an STS client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityCheck for StsIdentity {
    async fn caller_identity(&self) -> Result<CallerIdentity, CallError> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| classify("GetCallerIdentity", err))?;

        Ok(CallerIdentity {
            user_id: output.user_id().map(str::to_owned),
            account: output.account().map(str::to_owned),
            arn: output.arn().map(str::to_owned),
        })
    }
}
