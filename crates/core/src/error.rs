//! Assertion faults raised by result extraction.
//!
//! An [`UnwrapError`] is never a domain error: it means the caller asserted a
//! track (`unwrap`, `unwrap_err`, `expect`, `expect_err`) and the result was on
//! the other one. It is returned, not panicked, so it propagates with `?`.

use thiserror::Error;

use crate::kind::ResultType;

/// Failure of an extraction called on the wrong variant.
///
/// `Display` renders the message alone: the opposite payload's string form
/// for `unwrap`/`unwrap_err`, or the caller's text for `expect`/`expect_err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnwrapError {
    expected: ResultType,
    message: String,
}

/// Outcome of an extraction: the payload, or the assertion fault.
pub type Unwrapped<T> = std::result::Result<T, UnwrapError>;

impl UnwrapError {
    /// Create a fault for a caller that expected `expected` but found the other track.
    pub(crate) fn new(expected: ResultType, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(
            target: "railway_core::unwrap",
            %expected,
            found = %expected.opposite(),
            fault = %message,
            "result extraction on wrong variant"
        );
        Self { expected, message }
    }

    /// The variant the caller asserted.
    #[must_use]
    #[inline]
    pub const fn expected(&self) -> ResultType {
        self.expected
    }

    /// The variant the result actually held.
    #[must_use]
    #[inline]
    pub const fn found(&self) -> ResultType {
        self.expected.opposite()
    }

    /// The fault message, identical to the `Display` output.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the machine-readable error code for this fault.
    ///
    /// Error codes are always in `SCREAMING_SNAKE_CASE` format.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self.expected {
            ResultType::Ok => "UNWRAP_ON_ERR",
            ResultType::Err => "UNWRAP_ERR_ON_OK",
        }
    }
}
