//! Classification of AWS SDK errors.

use aws_sdk_bedrockruntime::error::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use probe_core::CallError;

/// Maps an SDK error onto a [`CallError`].
///
/// Modeled service errors become [`CallError::Rejected`]. Construction,
/// dispatch, timeout and response-parsing failures become
/// [`CallError::Unexpected`] with the full error chain as detail.
pub fn classify<E, R>(operation: &'static str, err: SdkError<E, R>) -> CallError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(context) => {
            let service_err = context.into_err();
            let code = service_err.code().unwrap_or("Unknown").to_string();
            let message = service_err
                .message()
                .map_or_else(|| service_err.to_string(), str::to_owned);
            tracing::debug!(operation, %code, "service rejected request");
            CallError::Rejected {
                operation,
                code,
                message,
            }
        }
        other => {
            let detail = DisplayErrorContext(&other).to_string();
            tracing::debug!(operation, %detail, "request failed before a service response");
            CallError::Unexpected { operation, detail }
        }
    }
}
