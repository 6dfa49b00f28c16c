//! Remote collaborators consumed by the probe.
//!
//! Each trait covers one service handle. The probe only sees these traits,
//! so tests drive it with stubs and the binary plugs in the AWS SDK.

use crate::config::ProbeConfig;
use crate::error::CallError;
use crate::request::{ConverseRequest, InvokeRequest};
use crate::response::{CallerIdentity, ConverseReply, InvokeReply};
use async_trait::async_trait;
use serde_json::Value;

/// Control-plane lookup of inference profiles.
#[async_trait]
pub trait ProfileCatalog: Send + Sync {
    /// Describes the inference profile named by `identifier`.
    async fn describe_profile(&self, identifier: &str) -> Result<Value, CallError>;
}

/// Runtime handle offering both invocation shapes.
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    /// Sends a `Converse` request.
    async fn converse(&self, request: ConverseRequest) -> Result<ConverseReply, CallError>;

    /// Sends a raw `InvokeModel` request.
    async fn invoke_model(&self, request: InvokeRequest) -> Result<InvokeReply, CallError>;
}

/// Caller identity lookup.
#[async_trait]
pub trait IdentityCheck: Send + Sync {
    /// Returns the identity behind the active credentials.
    async fn caller_identity(&self) -> Result<CallerIdentity, CallError>;
}

/// The set of handles one probe run uses.
pub struct Collaborators {
    /// Profile lookup, if the build carries that capability.
    pub profiles: Option<Box<dyn ProfileCatalog>>,
    /// Model invocation.
    pub runtime: Box<dyn ModelRuntime>,
    /// Identity lookup for diagnostics.
    pub identity: Box<dyn IdentityCheck>,
}

/// Builds [`Collaborators`] for a resolved configuration.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Region reported by the ambient configuration chain, if any.
    async fn ambient_region(&self) -> Option<String>;

    /// Constructs the handles for `config`.
    async fn connect(&self, config: &ProbeConfig) -> Collaborators;
}
