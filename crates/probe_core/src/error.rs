//! Error types for remote collaborator calls.

/// Errors building a request before it is sent.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// JSON serialization of a request body failed.
    #[error("failed to serialize request body: {0}")]
    Body(#[from] serde_json::Error),

    /// An SDK builder rejected its inputs.
    #[error("failed to build {what}: {detail}")]
    Build {
        /// The shape being built (e.g. "message").
        what: &'static str,
        /// Builder error text.
        detail: String,
    },
}

/// Errors returned by a remote collaborator call.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The service understood the request and declined it.
    #[error("An error occurred ({code}) when calling the {operation} operation: {message}")]
    Rejected {
        /// Remote operation name (e.g. `Converse`).
        operation: &'static str,
        /// Service error code (e.g. `AccessDeniedException`).
        code: String,
        /// Service error message.
        message: String,
    },

    /// Transport, timeout, decoding or any other failure.
    #[error("{operation}: {detail}")]
    Unexpected {
        /// Remote operation name.
        operation: &'static str,
        /// Full error representation.
        detail: String,
    },

    /// The request could not be built locally.
    #[error("{operation}: {source}")]
    Request {
        /// Remote operation name.
        operation: &'static str,
        /// The underlying build error.
        #[source]
        source: RequestError,
    },
}

impl CallError {
    /// Creates a [`CallError::Unexpected`] from any displayable error.
    pub fn unexpected(operation: &'static str, detail: impl std::fmt::Display) -> Self {
        Self::Unexpected {
            operation,
            detail: detail.to_string(),
        }
    }

    /// Returns `true` for a deliberate service-side rejection.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
