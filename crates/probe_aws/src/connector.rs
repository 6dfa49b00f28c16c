//! AWS [`Connector`] implementation.

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use probe_core::{Collaborators, Connector, ProbeConfig, ProfileCatalog};
use std::sync::Arc;

use super::identity::StsIdentity;
use super::runtime::BedrockRuntime;

/// Builds AWS SDK clients for the probe.
///
/// # Examples
///
/// ```no_run
/// # use probe_aws::AwsConnector;
/// // Using the default AWS credential and region chain
/// let connector = AwsConnector::from_env();
///
/// // With a custom SDK config
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
///     .region("us-west-2")
///     .load()
///     .await;
/// let connector = AwsConnector::from_sdk_config(sdk_config);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct AwsConnector {
    sdk_config: Option<SdkConfig>,
}

impl AwsConnector {
    /// Uses the default AWS credential and region chain.
    #[must_use]
    pub fn from_env() -> Self {
        Self { sdk_config: None }
    }

    /// Uses a pre-configured AWS SDK config.
    #[must_use]
    pub fn from_sdk_config(sdk_config: SdkConfig) -> Self {
        Self {
            sdk_config: Some(sdk_config),
        }
    }

    async fn load(&self, region: &str) -> SdkConfig {
        let region = Region::new(region.to_owned());
        match &self.sdk_config {
            Some(config) => config.to_builder().region(region).build(),
            None => {
                aws_config::defaults(BehaviorVersion::latest())
                    .region(region)
                    .load()
                    .await
            }
        }
    }
}

#[async_trait]
impl Connector for AwsConnector {
    async fn ambient_region(&self) -> Option<String> {
        let region = match &self.sdk_config {
            Some(config) => config.region().cloned(),
            None => RegionProviderChain::default_provider().region().await,
        };
        region.map(|region| region.to_string())
    }

    async fn connect(&self, config: &ProbeConfig) -> Collaborators {
        let sdk_config = self.load(&config.region).await;
        tracing::debug!(region = %config.region, "AWS clients configured");

        Collaborators {
            profiles: profile_catalog(&sdk_config),
            runtime: Box::new(BedrockRuntime::new(Arc::new(
                aws_sdk_bedrockruntime::Client::new(&sdk_config),
            ))),
            identity: Box::new(StsIdentity::new(aws_sdk_sts::Client::new(&sdk_config))),
        }
    }
}

#[cfg(feature = "profile-check")]
fn profile_catalog(sdk_config: &SdkConfig) -> Option<Box<dyn ProfileCatalog>> {
    Some(Box::new(super::profiles::BedrockProfiles::new(
        aws_sdk_bedrock::Client::new(sdk_config),
    )))
}

#[cfg(not(feature = "profile-check"))]
fn profile_catalog(_sdk_config: &SdkConfig) -> Option<Box<dyn ProfileCatalog>> {
    None
}
