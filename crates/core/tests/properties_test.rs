//! Property tests for the track laws of `Result`.

use std::cell::Cell;

use proptest::prelude::*;
use railway_core::{Result, err, ok};

fn any_result() -> impl Strategy<Value = Result<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(ok::<i64, String>),
        ".*".prop_map(err::<i64, String>),
    ]
}

proptest! {
    #[test]
    fn ok_constructed_results(value in any::<i64>(), fallback in any::<i64>()) {
        let result: Result<i64, String> = ok(value);
        prop_assert!(result.is_ok());
        prop_assert!(!result.is_err());
        prop_assert_eq!(result.clone().unwrap(), Ok(value));
        prop_assert_eq!(result.unwrap_or(fallback), value);
    }

    #[test]
    fn err_constructed_results(error in ".*", fallback in any::<i64>()) {
        let result: Result<i64, String> = err(error.clone());
        prop_assert!(result.is_err());
        prop_assert!(!result.is_ok());
        prop_assert_eq!(result.clone().unwrap_err(), Ok(error));
        prop_assert_eq!(result.unwrap_or(fallback), fallback);
    }

    #[test]
    fn ok_receiver_and_or_identity(value in any::<i64>(), other in any_result()) {
        let a: Result<i64, String> = ok(value);
        prop_assert_eq!(a.clone().and(other.clone()), other.clone());
        prop_assert_eq!(a.clone().or(other), a);
    }

    #[test]
    fn err_receiver_and_or_short_circuit(error in ".*", other in any_result()) {
        let a: Result<i64, String> = err(error);
        prop_assert_eq!(a.clone().and(other.clone()), a.clone());
        prop_assert_eq!(a.or(other.clone()), other);
    }

    #[test]
    fn callbacks_run_once_iff_guard_holds(receiver in any_result(), next in any_result()) {
        let and_calls = Cell::new(0_u32);
        let or_calls = Cell::new(0_u32);
        let was_ok = receiver.is_ok();

        let _ = receiver.clone().and_then(|| {
            and_calls.set(and_calls.get().saturating_add(1));
            next.clone()
        });
        let _ = receiver.or_else(|| {
            or_calls.set(or_calls.get().saturating_add(1));
            next.clone()
        });

        prop_assert_eq!(and_calls.get(), u32::from(was_ok));
        prop_assert_eq!(or_calls.get(), u32::from(!was_ok));
    }

    #[test]
    fn unwrap_fault_message_is_error_text(error in ".*") {
        let result: Result<i64, String> = err(error.clone());
        let message = result.unwrap().err().map(|fault| fault.to_string());
        prop_assert_eq!(message, Some(error));
    }

    #[test]
    fn expect_fault_ignores_payload(error in ".*", message in ".*") {
        let result: Result<i64, String> = err(error);
        let fault = result.expect(&message).err().map(|fault| fault.to_string());
        prop_assert_eq!(fault, Some(message));
    }
}
