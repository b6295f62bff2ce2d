//! # Railway Core
//!
//! A two-track `Result` type: a value is either `Ok(T)` on the success track
//! or `Err(E)` on the failure track, and combinators move it along without
//! panics or exceptions.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! The crate's own extractors (`unwrap`, `unwrap_err`, `expect`,
//! `expect_err`) return [`Unwrapped`], whose error is the [`UnwrapError`]
//! assertion fault. It is kept apart from the domain error `E`. Use:
//! - `?` operator to propagate the fault
//! - `and`, `and_then`, `or`, `or_else` to compose without extracting
//! - `unwrap_or`, `unwrap_or_else` for defaults that can never fault
//!
//! ## Payload Traits
//!
//! - [`FaultMessage`] renders a payload into an unwrap fault's message
//! - [`StrictEq`] decides `contains`/`contains_err`: by value for scalars and
//!   strings, by instance for `Rc`, `Arc` and references
//!
//! ```
//! use railway_core::{Result, err, ok};
//!
//! let a: Result<&str, &str> = err("I am an error");
//! let b: Result<&str, &str> = ok("foobar");
//!
//! assert_eq!(a.or(b).unwrap(), Ok("foobar"));
//! assert_eq!(b.and_then(|| err("Foo")).unwrap_err(), Ok("Foo"));
//! ```

mod convert;
mod error;
mod ext;
mod identity;
mod kind;
mod message;
mod result;

pub use error::{UnwrapError, Unwrapped};
pub use ext::ResultExt;
pub use identity::{SameInstance, StrictEq};
pub use kind::ResultType;
pub use message::FaultMessage;
pub use result::{ControlFlowFn, Result, err, ok};
