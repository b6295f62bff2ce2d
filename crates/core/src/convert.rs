//! Interop with `std::result::Result` and `Option`.

use crate::result::Result;

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<T, E> Result<T, E> {
    /// Convert into the standard library result, for use with `?`.
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// `Some(value)` becomes `Ok(value)`, `None` becomes `Err(error)`.
    #[inline]
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Self::Ok(value),
            None => Self::Err(error),
        }
    }
}
