//! The two-track `Result` type and its combinators.
//!
//! A [`Result`] is either `Ok(T)` or `Err(E)`, fixed at construction. Every
//! combinator consumes the receiver and hands back a result, so values move
//! along the success track or the failure track without ever being mutated.
//!
//! Extraction never panics. `unwrap`, `unwrap_err`, `expect` and `expect_err`
//! return [`Unwrapped`], whose error side is the [`UnwrapError`] assertion
//! fault; propagate it with `?` or decide locally that it is fatal.
//!
//! # Examples
//!
//! ```
//! use railway_core::{Result, Unwrapped, err, ok};
//!
//! fn division(value: i32, divisor: i32) -> Result<i32> {
//!     if divisor == 0 {
//!         err("Division by zero".to_string())
//!     } else {
//!         ok(value / divisor)
//!     }
//! }
//!
//! fn run() -> Unwrapped<()> {
//!     assert_eq!(division(50, 10).unwrap()?, 5);
//!     assert_eq!(division(50, 0).or(ok(100)).unwrap()?, 100);
//!     Ok(())
//! }
//!
//! assert!(run().is_ok());
//! ```

use crate::error::{UnwrapError, Unwrapped};
use crate::identity::StrictEq;
use crate::kind::ResultType;
use crate::message::FaultMessage;

/// Callback for [`Result::and_then`] / [`Result::or_else`] that has to be
/// stored before it is run.
///
/// Fallback sources kept in a list and tried in order until one succeeds:
///
/// ```
/// use railway_core::{ControlFlowFn, Result, err, ok};
///
/// let sources: Vec<ControlFlowFn<u16>> = vec![
///     Box::new(|| err("PORT is unset".to_string())),
///     Box::new(|| ok(8080)),
///     Box::new(|| ok(9090)),
/// ];
///
/// let flag: Result<u16> = err("--port not given".to_string());
/// let port = sources
///     .into_iter()
///     .fold(flag, |resolved, source| resolved.or_else(source));
///
/// assert_eq!(port, ok(8080));
/// ```
pub type ControlFlowFn<T, E = String> = Box<dyn FnOnce() -> Result<T, E>>;

/// Either a success carrying `T` or a failure carrying `E`.
///
/// The error type defaults to `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E = String> {
    /// Success track.
    Ok(T),
    /// Failure track.
    Err(E),
}

/// Build a result on the success track.
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Build a result on the failure track.
#[inline]
pub const fn err<T, E>(value: E) -> Result<T, E> {
    Result::Err(value)
}

impl<T, E> Result<T, E> {
    /// Returns `true` if the result is `Ok`.
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the result is `Err`.
    #[must_use]
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// The track this result is on.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ResultType {
        match self {
            Self::Ok(_) => ResultType::Ok,
            Self::Err(_) => ResultType::Err,
        }
    }

    /// Returns `other` if the result is `Ok`, otherwise keeps the error.
    ///
    /// ```
    /// use railway_core::{Result, ok};
    ///
    /// let first: Result<&str> = ok("discarded");
    /// assert_eq!(first.and(ok("FooBar")), ok("FooBar"));
    /// ```
    #[inline]
    pub fn and(self, other: Self) -> Self {
        if self.is_ok() { other } else { self }
    }

    /// Calls `f` if the result is `Ok` and returns what it produced.
    ///
    /// `f` takes no arguments and runs at most once, on this thread. An `Err`
    /// receiver is returned untouched and `f` is dropped without being called.
    #[inline]
    pub fn and_then<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_ok() { f() } else { self }
    }

    /// Keeps an `Ok`, otherwise returns `other`.
    ///
    /// ```
    /// use railway_core::{Result, err, ok};
    ///
    /// let failed: Result<&str, &str> = err("foo");
    /// assert_eq!(failed.or(ok("bar")), ok("bar"));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        if self.is_ok() { self } else { other }
    }

    /// Calls `f` if the result is `Err` and returns what it produced.
    ///
    /// Same calling discipline as [`Result::and_then`], on the failure track.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_err() { f() } else { self }
    }

    /// Returns the `Ok` payload.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] whose message is the `Err` payload's
    /// [`FaultMessage`] if the result is `Err`.
    #[inline]
    pub fn unwrap(self) -> Unwrapped<T>
    where
        E: FaultMessage,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapError::new(ResultType::Ok, error.fault_message())),
        }
    }

    /// Returns the `Err` payload.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] whose message is the `Ok` payload's
    /// [`FaultMessage`] if the result is `Ok`.
    #[inline]
    pub fn unwrap_err(self) -> Unwrapped<E>
    where
        T: FaultMessage,
    {
        match self {
            Self::Ok(value) => Err(UnwrapError::new(ResultType::Err, value.fault_message())),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the `Ok` payload, or `fallback` if the result is `Err`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// Returns the `Ok` payload, or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the `Ok` payload, or `T::default()` if the result is `Err`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns the `Ok` payload.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying exactly `message` if the result is
    /// `Err`. The error payload is discarded; `message` is the context.
    #[inline]
    pub fn expect(self, message: &str) -> Unwrapped<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(UnwrapError::new(ResultType::Ok, message)),
        }
    }

    /// Returns the `Err` payload.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying exactly `message` if the result is `Ok`.
    #[inline]
    pub fn expect_err(self, message: &str) -> Unwrapped<E> {
        match self {
            Self::Ok(_) => Err(UnwrapError::new(ResultType::Err, message)),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns `true` if the result is `Ok` and its payload is strictly
    /// equal to `value`.
    ///
    /// Strict equality is [`StrictEq`]: scalars and strings compare by value,
    /// shared handles and references by instance. Two distinct `Rc`s holding
    /// equal data are not the same payload.
    ///
    /// ```
    /// use std::rc::Rc;
    /// use railway_core::{Result, ok};
    ///
    /// let shared = Rc::new(vec![1, 2]);
    /// let result: Result<Rc<Vec<i32>>> = ok(Rc::clone(&shared));
    ///
    /// assert!(result.contains(Rc::clone(&shared)));
    /// assert!(!result.contains(Rc::new(vec![1, 2])));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains<U>(&self, value: U) -> bool
    where
        T: StrictEq<U>,
    {
        matches!(self, Self::Ok(payload) if payload.strict_eq(&value))
    }

    /// Returns `true` if the result is `Err` and its payload is strictly
    /// equal to `value`.
    ///
    /// Same equality rule as [`Result::contains`].
    #[must_use]
    #[inline]
    pub fn contains_err<U>(&self, value: U) -> bool
    where
        E: StrictEq<U>,
    {
        matches!(self, Self::Err(payload) if payload.strict_eq(&value))
    }

    /// Transform the `Ok` payload.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Transform the `Err` payload.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(f(error)),
        }
    }

    /// Map both tracks in a single operation.
    #[inline]
    pub fn bimap<U, E2, F, EF>(self, ok_fn: F, err_fn: EF) -> Result<U, E2>
    where
        F: FnOnce(T) -> U,
        EF: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Result::Ok(ok_fn(value)),
            Self::Err(error) => Result::Err(err_fn(error)),
        }
    }

    /// Feed the `Ok` payload into a fallible step.
    ///
    /// This is the value-passing sibling of [`Result::and_then`].
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Perform a side effect on the `Ok` payload without consuming it.
    #[inline]
    pub fn tap<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Perform a side effect on the `Err` payload without consuming it.
    #[inline]
    pub fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Self::Err(ref error) = self {
            f(error);
        }
        self
    }

    /// Borrow both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// The `Ok` payload, discarding any error.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// The `Err` payload, discarding any success.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }
}
