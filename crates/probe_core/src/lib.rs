//! Core of the Bedrock inference profile probe.
//!
//! The probe resolves its configuration from the environment, optionally
//! describes the inference profile, then tries two invocation strategies in
//! order and stops at the first that succeeds:
//!
//! | Step | Remote operation | On failure |
//! |------|------------------|------------|
//! | Profile check | `GetInferenceProfile` | warn and continue |
//! | Primary | `Converse` | report, try fallback |
//! | Fallback | `InvokeModel` (Anthropic Messages body) | report, run diagnostics |
//! | Diagnostics | `GetCallerIdentity` | ignored |
//!
//! Remote services are reached through the traits in [`collaborator`], so the
//! sequence in [`prober`] is independent of the AWS SDK.
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo(connector: &dyn probe_core::Connector) {
//! use probe_core::{Console, ProcessEnv};
//!
//! let mut console = Console::stdio();
//! let exit = probe_core::run(&ProcessEnv, connector, &mut console).await;
//! std::process::exit(i32::from(exit.code()));
//! # }
//! ```

pub mod collaborator;
pub mod config;
pub mod console;
pub mod error;
pub mod outcome;
pub mod prober;
pub mod request;
pub mod response;

pub use collaborator::{Collaborators, Connector, IdentityCheck, ModelRuntime, ProfileCatalog};
pub use config::{ConfigError, EnvConfig, EnvSource, ProbeConfig, ProcessEnv, RegionSource};
pub use console::Console;
pub use error::{CallError, RequestError};
pub use outcome::Outcome;
pub use prober::{ProbeExit, Prober, run};
pub use request::{AnthropicMessagesBody, ConverseRequest, InvokeRequest};
pub use response::{CallerIdentity, ContentSegment, ConverseReply, InvokeReply};
