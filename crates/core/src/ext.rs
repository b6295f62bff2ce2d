//! Logged exits from the railway.
//!
//! These helpers leave the two-track world by dropping the error, so they
//! record it through `tracing` first.

use crate::message::FaultMessage;
use crate::result::Result;

/// Extension trait for discarding errors without losing them silently.
pub trait ResultExt<T, E> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T, E: FaultMessage> ResultExt<T, E> for Result<T, E> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(e) => {
                tracing::error!("Operation failed: {}", e.fault_message());
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(e) => {
                tracing::error!("Operation failed, using default: {}", e.fault_message());
                default
            }
        }
    }
}
