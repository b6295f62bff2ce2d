//! Strict equality for payload containment.
//!
//! [`Result::contains`](crate::Result::contains) never compares compound
//! values structurally. Scalars, strings, `()` and `Option` of those compare
//! by value; shared handles (`Rc`, `Arc`) and references compare by instance,
//! so two distinct allocations holding equal data are not the same payload.
//!
//! Plain value types of your own opt in with [`strict_eq_by_value!`](crate::strict_eq_by_value).

use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison: true only when both sides refer to one instance.
pub trait SameInstance {
    fn same_instance(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameInstance for Rc<T> {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameInstance for Arc<T> {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameInstance for &T {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

/// Equality as used by `contains`/`contains_err`: by value for primitives,
/// by instance for everything that points at shared data.
pub trait StrictEq<Rhs: ?Sized = Self> {
    fn strict_eq(&self, other: &Rhs) -> bool;
}

/// Implement [`StrictEq`] as plain `==` for types that behave like primitives.
///
/// ```
/// use railway_core::{Result, err, strict_eq_by_value};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Code {
///     NotFound,
///     Timeout,
/// }
///
/// strict_eq_by_value!(Code);
///
/// let result: Result<(), Code> = err(Code::Timeout);
/// assert!(result.contains_err(Code::Timeout));
/// assert!(!result.contains_err(Code::NotFound));
/// ```
#[macro_export]
macro_rules! strict_eq_by_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::StrictEq for $ty {
                #[inline]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

strict_eq_by_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl StrictEq for () {
    #[inline]
    fn strict_eq(&self, _other: &Self) -> bool {
        true
    }
}

impl StrictEq for str {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl StrictEq for &str {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        *self == *other
    }
}

impl StrictEq<&str> for String {
    #[inline]
    fn strict_eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl StrictEq<String> for &str {
    #[inline]
    fn strict_eq(&self, other: &String) -> bool {
        *self == other.as_str()
    }
}

impl<T: StrictEq> StrictEq for Option<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.strict_eq(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> StrictEq for Rc<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl<T: ?Sized> StrictEq for Arc<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

// Sized referents only: `&str` above compares by value.
impl<T> StrictEq for &T {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl<T> StrictEq for &[T] {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_clone_is_same_instance() {
        let a = Rc::new(vec![1, 2, 3]);
        let b = Rc::clone(&a);
        assert!(a.same_instance(&b));
        assert!(a.strict_eq(&b));
    }

    #[test]
    fn test_equal_rcs_are_distinct_instances() {
        let a = Rc::new(vec![1, 2, 3]);
        let b = Rc::new(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert!(!a.same_instance(&b));
        assert!(!a.strict_eq(&b));
    }

    #[test]
    fn test_arc_identity() {
        let a = Arc::new(String::from("shared"));
        let b = Arc::clone(&a);
        let c = Arc::new(String::from("shared"));
        assert!(a.strict_eq(&b));
        assert!(!a.strict_eq(&c));
    }

    #[test]
    fn test_reference_identity() {
        let first = [7_u8; 4];
        let second = [7_u8; 4];
        assert!((&first).strict_eq(&&first));
        assert!(!(&first).strict_eq(&&second));
    }

    #[test]
    fn test_slice_identity() {
        let first = vec![1, 2];
        let second = vec![1, 2];
        let view: &[i32] = &first;
        assert!(view.strict_eq(&first.as_slice()));
        assert!(!view.strict_eq(&second.as_slice()));
    }

    #[test]
    fn test_primitives_and_strings_compare_by_value() {
        assert!(42_i32.strict_eq(&42));
        assert!(!1.5_f64.strict_eq(&2.5));
        assert!(!f64::NAN.strict_eq(&f64::NAN));
        assert!("Foobar".strict_eq(&"Foobar"));
        assert!(String::from("Foobar").strict_eq(&"Foobar"));
        assert!("Foobar".strict_eq(&String::from("Foobar")));
        assert!(().strict_eq(&()));
    }

    #[test]
    fn test_option_follows_inner_rule() {
        let shared = Rc::new(0_u8);
        assert!(None::<i32>.strict_eq(&None));
        assert!(Some(3).strict_eq(&Some(3)));
        assert!(!Some(3).strict_eq(&None));
        assert!(Some(Rc::clone(&shared)).strict_eq(&Some(Rc::clone(&shared))));
        assert!(!Some(shared).strict_eq(&Some(Rc::new(0_u8))));
    }
}
