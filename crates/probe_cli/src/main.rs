//! Bedrock inference profile probe CLI.
//!
//! Verifies an inference profile, then tries `Converse` and falls back to
//! `InvokeModel` with an Anthropic Messages body.
//!
//! # Usage
//!
//! ```bash
//! export BEDROCK_INFERENCE_PROFILE_ARN=arn:aws:bedrock:us-east-1:123456789012:inference-profile/my-profile
//! PROMPT="Say hello in one short sentence." bedrock-probe
//! ```
//!
//! Exit codes: `0` a strategy succeeded, `1` both failed, `2` no ARN set.

mod logging;

use logging::Tracing;
use probe_aws::AwsConnector;
use probe_core::{Console, ProcessEnv};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    Tracing::from_env().init();

    let mut console = Console::stdio();
    let exit = probe_core::run(&ProcessEnv, &AwsConnector::from_env(), &mut console).await;

    tracing::debug!(code = exit.code(), "probe finished");
    exit.into()
}
