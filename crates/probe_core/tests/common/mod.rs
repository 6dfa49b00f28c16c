//! Stub collaborators and captured console for probe tests.

#![allow(dead_code, reason = "not every test file uses every helper")]

use async_trait::async_trait;
use parking_lot::Mutex;
use probe_core::{
    CallError, CallerIdentity, Collaborators, Connector, Console, ContentSegment, ConverseReply,
    ConverseRequest, IdentityCheck, InvokeReply, InvokeRequest, ModelRuntime, ProbeConfig,
    ProfileCatalog,
};
use serde_json::{Value, json};
use std::io::Write;
use std::sync::Arc;

pub const ARN: &str = "arn:aws:bedrock:us-west-2:123456789012:inference-profile/test-profile";

/// Scripted behaviour of one remote call.
#[derive(Debug, Clone)]
pub enum Stub<T> {
    /// Return the value.
    Ok(T),
    /// Fail with a service rejection carrying this code.
    Reject(&'static str),
    /// Fail with a transport-level error.
    Fail(&'static str),
}

impl<T: Clone> Stub<T> {
    fn call(&self, operation: &'static str) -> Result<T, CallError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Reject(code) => Err(CallError::Rejected {
                operation,
                code: (*code).to_string(),
                message: "stubbed rejection".to_string(),
            }),
            Self::Fail(detail) => Err(CallError::unexpected(operation, detail)),
        }
    }
}

/// Ordered record of the remote operations that were attempted.
#[derive(Debug, Default)]
pub struct CallLog(Mutex<Vec<&'static str>>);

impl CallLog {
    fn record(&self, operation: &'static str) {
        self.0.lock().push(operation);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().clone()
    }
}

/// Connector returning stubbed collaborators.
#[derive(Debug, Clone)]
pub struct StubConnector {
    pub region: Option<String>,
    pub profile: Option<Stub<Value>>,
    pub converse: Stub<ConverseReply>,
    pub invoke: Stub<InvokeReply>,
    pub identity: Stub<CallerIdentity>,
    pub log: Arc<CallLog>,
}

impl Default for StubConnector {
    fn default() -> Self {
        Self {
            region: Some("us-west-2".to_string()),
            profile: Some(Stub::Ok(json!({
                "inferenceProfileArn": ARN,
                "status": "ACTIVE",
            }))),
            converse: Stub::Ok(text_reply(&["Hello."])),
            invoke: Stub::Ok(json_payload(r#"{"content":[{"type":"text","text":"Hi"}]}"#)),
            identity: Stub::Ok(CallerIdentity {
                user_id: Some("AIDAEXAMPLE".to_string()),
                account: Some("123456789012".to_string()),
                arn: Some("arn:aws:iam::123456789012:user/probe".to_string()),
            }),
            log: Arc::default(),
        }
    }
}

#[async_trait]
impl Connector for StubConnector {
    async fn ambient_region(&self) -> Option<String> {
        self.log.record("ResolveRegion");
        self.region.clone()
    }

    async fn connect(&self, _config: &ProbeConfig) -> Collaborators {
        self.log.record("Connect");
        Collaborators {
            profiles: self.profile.clone().map(|stub| {
                Box::new(StubCatalog {
                    stub,
                    log: Arc::clone(&self.log),
                }) as Box<dyn ProfileCatalog>
            }),
            runtime: Box::new(StubRuntime {
                converse: self.converse.clone(),
                invoke: self.invoke.clone(),
                log: Arc::clone(&self.log),
            }),
            identity: Box::new(StubIdentity {
                stub: self.identity.clone(),
                log: Arc::clone(&self.log),
            }),
        }
    }
}

struct StubCatalog {
    stub: Stub<Value>,
    log: Arc<CallLog>,
}

#[async_trait]
impl ProfileCatalog for StubCatalog {
    async fn describe_profile(&self, _identifier: &str) -> Result<Value, CallError> {
        self.log.record("GetInferenceProfile");
        self.stub.call("GetInferenceProfile")
    }
}

struct StubRuntime {
    converse: Stub<ConverseReply>,
    invoke: Stub<InvokeReply>,
    log: Arc<CallLog>,
}

#[async_trait]
impl ModelRuntime for StubRuntime {
    async fn converse(&self, _request: ConverseRequest) -> Result<ConverseReply, CallError> {
        self.log.record("Converse");
        self.converse.call("Converse")
    }

    async fn invoke_model(&self, _request: InvokeRequest) -> Result<InvokeReply, CallError> {
        self.log.record("InvokeModel");
        self.invoke.call("InvokeModel")
    }
}

struct StubIdentity {
    stub: Stub<CallerIdentity>,
    log: Arc<CallLog>,
}

#[async_trait]
impl IdentityCheck for StubIdentity {
    async fn caller_identity(&self) -> Result<CallerIdentity, CallError> {
        self.log.record("GetCallerIdentity");
        self.stub.call("GetCallerIdentity")
    }
}

/// A Converse reply whose message holds the given text segments.
pub fn text_reply(texts: &[&str]) -> ConverseReply {
    ConverseReply {
        content: Some(
            texts
                .iter()
                .map(|text| ContentSegment::Text((*text).to_string()))
                .collect(),
        ),
        raw: json!({
            "output": {"message": {"role": "assistant", "content": texts.iter().map(|t| json!({"text": t})).collect::<Vec<_>>()}},
            "stopReason": "end_turn",
        }),
    }
}

/// An InvokeModel reply with a JSON payload.
pub fn json_payload(body: &str) -> InvokeReply {
    InvokeReply {
        body: body.as_bytes().to_vec(),
        content_type: Some("application/json".to_string()),
    }
}

/// Thread-safe in-memory writer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

/// Console whose streams can be inspected after a run.
pub struct Captured {
    pub out: SharedBuffer,
    pub err: SharedBuffer,
}

impl Captured {
    pub fn new() -> (Self, Console) {
        let captured = Self {
            out: SharedBuffer::default(),
            err: SharedBuffer::default(),
        };
        let console = Console::new(captured.out.clone(), captured.err.clone());
        (captured, console)
    }

    pub fn stdout(&self) -> String {
        self.out.contents()
    }

    pub fn stderr(&self) -> String {
        self.err.contents()
    }
}
