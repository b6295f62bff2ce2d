//! The discriminant of a [`Result`](crate::Result).

use std::fmt;

/// Which track a result is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultType {
    Ok,
    Err,
}

impl ResultType {
    /// The other track.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Ok => Self::Err,
            Self::Err => Self::Ok,
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "Ok"),
            Self::Err => write!(f, "Err"),
        }
    }
}
