//! String form of a payload, used as the message of an unwrap fault.
//!
//! Every payload a result can hold must be renderable when `unwrap` or
//! `unwrap_err` fails, including the absent sentinels `()` and `None`, which
//! have no `Display`. Types with a `Display` impl opt in with
//! [`fault_message_via_display!`](crate::fault_message_via_display).

use std::rc::Rc;
use std::sync::Arc;

use crate::error::UnwrapError;

/// Renders a payload into the message of an [`UnwrapError`].
pub trait FaultMessage {
    fn fault_message(&self) -> String;
}

/// Implement [`FaultMessage`] through `Display`.
///
/// ```
/// use railway_core::{Result, err, fault_message_via_display};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("config missing: {0}")]
/// struct ConfigError(String);
///
/// fault_message_via_display!(ConfigError);
///
/// let result: Result<u16, ConfigError> = err(ConfigError("port".to_string()));
/// let fault = result.unwrap().err().map(|fault| fault.to_string());
/// assert_eq!(fault.as_deref(), Some("config missing: port"));
/// ```
#[macro_export]
macro_rules! fault_message_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FaultMessage for $ty {
                #[inline]
                fn fault_message(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

fault_message_via_display!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    UnwrapError,
    std::io::Error,
    dyn std::error::Error,
    dyn std::error::Error + Send + Sync,
);

impl FaultMessage for () {
    #[inline]
    fn fault_message(&self) -> String {
        "()".to_string()
    }
}

impl<T: FaultMessage> FaultMessage for Option<T> {
    #[inline]
    fn fault_message(&self) -> String {
        self.as_ref()
            .map_or_else(|| "None".to_string(), FaultMessage::fault_message)
    }
}

impl<T: FaultMessage + ?Sized> FaultMessage for &T {
    #[inline]
    fn fault_message(&self) -> String {
        (**self).fault_message()
    }
}

impl<T: FaultMessage + ?Sized> FaultMessage for Box<T> {
    #[inline]
    fn fault_message(&self) -> String {
        (**self).fault_message()
    }
}

impl<T: FaultMessage + ?Sized> FaultMessage for Rc<T> {
    #[inline]
    fn fault_message(&self) -> String {
        (**self).fault_message()
    }
}

impl<T: FaultMessage + ?Sized> FaultMessage for Arc<T> {
    #[inline]
    fn fault_message(&self) -> String {
        (**self).fault_message()
    }
}
