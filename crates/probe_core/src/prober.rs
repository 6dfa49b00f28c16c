//! The probe sequence.
//!
//! ```text
//! START → RESOLVE_CONFIG ─(missing ARN)─▶ exit 2
//!       → CONNECT → VERIFY_PROFILE (best effort)
//!       → CONVERSE ─(ok)─▶ exit 0
//!       → INVOKE_MODEL ─(ok)─▶ exit 0
//!       → DIAGNOSTICS → exit 1
//! ```

use crate::collaborator::{Collaborators, Connector};
use crate::config::{
    ConfigError, DEFAULT_REGION, EnvConfig, EnvSource, PROFILE_ARN_VAR, ProbeConfig,
};
use crate::console::Console;
use crate::error::CallError;
use crate::outcome::Outcome;
use crate::request::{ConverseRequest, InvokeRequest};
use crate::response::InvokeReply;
use serde_json::json;

/// Remediation checklist printed when every strategy failed.
pub const CHECKLIST: &str = "Checklist: \n\
- Ensure the ARN is correct and in this region.\n\
- Confirm IAM permissions: bedrock:InvokeModel and bedrock:Converse on the target inference profile or routed models.\n\
- Verify that the routed model for the profile supports the chosen API (Converse or Anthropic Messages).\n\
- Confirm VPC endpoints or network egress allow Bedrock access if using private networking.";

/// Banner opening the terminal diagnostics.
pub const FAILURE_BANNER: &str = "All attempts failed. Diagnostics:";

/// How a probe run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeExit {
    /// One of the strategies produced output.
    Success,
    /// Both strategies failed.
    Exhausted,
    /// The target identifier was not configured.
    MissingConfig,
}

impl ProbeExit {
    /// Process exit code for this result.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Exhausted => 1,
            Self::MissingConfig => 2,
        }
    }
}

impl From<ProbeExit> for std::process::ExitCode {
    fn from(exit: ProbeExit) -> Self {
        Self::from(exit.code())
    }
}

/// Runs the full probe.
///
/// No error escapes this function: every failure is reported on `console`
/// and reflected in the returned [`ProbeExit`].
pub async fn run<E, C>(env: &E, connector: &C, console: &mut Console) -> ProbeExit
where
    E: EnvSource + ?Sized,
    C: Connector + ?Sized,
{
    let settings = match EnvConfig::read(env) {
        Ok(settings) => settings,
        Err(err) => {
            report_config_error(console, &err);
            return ProbeExit::MissingConfig;
        }
    };

    let config = settings.with_region(connector.ambient_region().await);
    if config.region_defaulted() {
        console.err(format!(
            "WARNING: No AWS region configured in your environment. Falling back to {DEFAULT_REGION}."
        ));
    }

    tracing::debug!(region = %config.region, target = %config.target, "configuration resolved");

    let collaborators = connector.connect(&config).await;
    let exit = Prober::new(&config, &collaborators).run(console).await;
    console.flush();
    exit
}

fn report_config_error(console: &mut Console, err: &ConfigError) {
    console.err(format!("ERROR: {err}"));
    console.err("Set it, then re-run. Example:");
    console.err(format!(
        "  export {PROFILE_ARN_VAR}=arn:aws:bedrock:us-east-1:123456789012:inference-profile/my-profile"
    ));
}

/// Runs the remote steps against a resolved configuration.
pub struct Prober<'a> {
    config: &'a ProbeConfig,
    collaborators: &'a Collaborators,
}

impl<'a> Prober<'a> {
    /// Creates a prober over borrowed configuration and handles.
    #[must_use]
    pub fn new(config: &'a ProbeConfig, collaborators: &'a Collaborators) -> Self {
        Self {
            config,
            collaborators,
        }
    }

    /// Verifies the profile, tries both strategies, then reports diagnostics.
    pub async fn run(&self, console: &mut Console) -> ProbeExit {
        self.verify_profile(console).await;

        if self.try_converse(console).await || self.try_invoke_model(console).await {
            return ProbeExit::Success;
        }

        self.diagnose(console).await;
        ProbeExit::Exhausted
    }

    /// Describes the inference profile if the capability is available.
    ///
    /// Never fatal.
    pub async fn verify_profile(&self, console: &mut Console) {
        let Some(profiles) = &self.collaborators.profiles else {
            console.out("SDK does not expose get_inference_profile; skipping profile pre-check.");
            return;
        };

        match profiles.describe_profile(&self.config.target).await {
            Ok(descriptor) => {
                console.out("Verified inference profile:");
                console.out_json(&descriptor);
            }
            Err(err) => {
                console.err(
                    "WARN: Could not describe the inference profile (may be a permissions or SDK-version issue):",
                );
                console.err(err);
            }
        }
    }

    /// Tries the `Converse` API. Returns `true` on success.
    pub async fn try_converse(&self, console: &mut Console) -> bool {
        console.out("");
        console.out("Attempting bedrock-runtime.converse via inference profile ARN ...");

        let request = ConverseRequest::new(&self.config.target, &self.config.prompt);
        tracing::debug!(model_id = %request.model_id, max_tokens = request.max_tokens, "calling Converse");

        let outcome = Outcome::from(self.collaborators.runtime.converse(request).await);
        match outcome {
            Outcome::Success(reply) => {
                if reply.content.is_none() {
                    console.out_json(&reply.raw);
                    return true;
                }
                console.out("Converse response:");
                match reply.text() {
                    Some(text) => console.out(text),
                    None => console.out_json(&reply.raw),
                }
                true
            }
            failure => {
                report_failure(console, "Converse", failure);
                false
            }
        }
    }

    /// Tries `InvokeModel` with an Anthropic Messages body. Returns `true` on
    /// success.
    pub async fn try_invoke_model(&self, console: &mut Console) -> bool {
        console.out("");
        console.out("Attempting bedrock-runtime.invoke_model with Anthropic-style payload ...");

        let outcome: Outcome<String> =
            match InvokeRequest::anthropic(&self.config.target, &self.config.prompt) {
                Ok(request) => {
                    tracing::debug!(
                        model_id = %request.model_id,
                        body_len = request.body.len(),
                        "calling InvokeModel"
                    );
                    Outcome::from(self.collaborators.runtime.invoke_model(request).await)
                        .and_then(InvokeReply::into_text)
                }
                Err(source) => Outcome::from(Err::<String, _>(CallError::Request {
                    operation: "InvokeModel",
                    source,
                })),
            };

        match outcome {
            Outcome::Success(text) => {
                console.out("InvokeModel response:");
                console.out(text);
                true
            }
            failure => {
                report_failure(console, "InvokeModel", failure);
                false
            }
        }
    }

    /// Prints identity diagnostics and the remediation checklist.
    ///
    /// Identity lookup failures are swallowed.
    pub async fn diagnose(&self, console: &mut Console) {
        console.err("");
        console.err(FAILURE_BANNER);

        match self.collaborators.identity.caller_identity().await {
            Ok(caller) => console.out_json(&json!({
                "caller": caller,
                "region": self.config.region,
                "inference_profile_arn": self.config.target,
            })),
            Err(err) => tracing::debug!(error = %err, "identity diagnostics unavailable"),
        }

        console.err(CHECKLIST);
    }
}

fn report_failure<T>(console: &mut Console, label: &str, outcome: Outcome<T>) {
    match outcome {
        Outcome::Rejected(reason) => {
            console.err(format!("{label} attempt failed:"));
            console.err(reason);
        }
        Outcome::Unexpected(reason) => {
            console.err(format!("{label} attempt error:"));
            console.err(reason);
        }
        Outcome::Success(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(ProbeExit::Success.code(), 0);
        assert_eq!(ProbeExit::Exhausted.code(), 1);
        assert_eq!(ProbeExit::MissingConfig.code(), 2);
    }

    #[test]
    fn checklist_covers_likely_causes() {
        assert!(CHECKLIST.starts_with("Checklist: \n- Ensure the ARN"));
        assert!(CHECKLIST.contains("bedrock:InvokeModel and bedrock:Converse"));
        assert!(CHECKLIST.contains("Converse or Anthropic Messages"));
        assert!(CHECKLIST.contains("VPC endpoints"));
        assert_eq!(CHECKLIST.lines().count(), 5);
    }
}
