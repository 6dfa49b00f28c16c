//! AWS SDK collaborators for the Bedrock inference profile probe.
//!
//! | Collaborator | Client | Operation |
//! |--------------|--------|-----------|
//! | [`BedrockProfiles`] | `aws-sdk-bedrock` | `GetInferenceProfile` (feature `profile-check`) |
//! | [`BedrockRuntime`] | `aws-sdk-bedrockruntime` | `Converse`, `InvokeModel` |
//! | [`StsIdentity`] | `aws-sdk-sts` | `GetCallerIdentity` |
//!
//! Credentials and region come from the default AWS chain unless a
//! pre-built `SdkConfig` is supplied:
//!
//! ```no_run
//! use probe_aws::AwsConnector;
//! use probe_core::{Console, ProcessEnv};
//!
//! # async fn demo() {
//! let mut console = Console::stdio();
//! let exit = probe_core::run(&ProcessEnv, &AwsConnector::from_env(), &mut console).await;
//! # let _ = exit;
//! # }
//! ```

mod connector;
pub mod error;
mod identity;
#[cfg(feature = "profile-check")]
mod profiles;
mod request;
mod response;
mod runtime;
mod types;

pub use connector::AwsConnector;
pub use identity::StsIdentity;
#[cfg(feature = "profile-check")]
pub use profiles::BedrockProfiles;
pub use runtime::BedrockRuntime;
