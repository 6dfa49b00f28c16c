//! Tagged result of a single invocation attempt.

use crate::error::CallError;

/// Outcome of one strategy attempt.
///
/// Both failure variants mean "try the next strategy"; the distinction only
/// changes how the failure is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The call produced a payload.
    Success(T),
    /// The service declined the request.
    Rejected(String),
    /// Anything else went wrong.
    Unexpected(String),
}

impl<T> Outcome<T> {
    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Applies a fallible step to a successful payload.
    ///
    /// A failing step turns the outcome into [`Outcome::Unexpected`].
    pub fn and_then<U, E: std::fmt::Display>(
        self,
        f: impl FnOnce(T) -> Result<U, E>,
    ) -> Outcome<U> {
        match self {
            Self::Success(value) => match f(value) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(err) => Outcome::Unexpected(err.to_string()),
            },
            Self::Rejected(reason) => Outcome::Rejected(reason),
            Self::Unexpected(reason) => Outcome::Unexpected(reason),
        }
    }
}

impl<T> From<Result<T, CallError>> for Outcome<T> {
    fn from(result: Result<T, CallError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) if err.is_rejection() => Self::Rejected(err.to_string()),
            Err(err) => Self::Unexpected(err.to_string()),
        }
    }
}
