//! Comparison forms used by test cases.
//!
//! Each function compares one pair of operands and, on mismatch, records the
//! failure in the [`ResultRecord`] and returns `false`. The `assert_*!` macros
//! wrap them and return from the enclosing test case on the first failure.

#[cfg(feature = "long")]
use core::ffi::{c_long, c_ulong};
#[cfg(feature = "longlong")]
use core::ffi::{c_longlong, c_ulonglong};

use crate::record::{Location, ResultRecord};
use crate::value::Value;

fn compare(
    record: &mut ResultRecord,
    at: Location,
    passed: bool,
    expected: Value,
    actual: Value,
) -> bool {
    if !passed {
        debug!(
            "assertion failed at {}: expected {} ({}), got {}",
            at,
            expected,
            expected.kind(),
            actual
        );
        record.fail(at, expected, actual);
    }
    passed
}

pub fn int_eq(record: &mut ResultRecord, at: Location, actual: i32, expected: i32) -> bool {
    compare(
        record,
        at,
        actual == expected,
        Value::Int(expected),
        Value::Int(actual),
    )
}

pub fn uint_eq(record: &mut ResultRecord, at: Location, actual: u32, expected: u32) -> bool {
    compare(
        record,
        at,
        actual == expected,
        Value::UInt(expected),
        Value::UInt(actual),
    )
}

/// Compares addresses only; pointer metadata is ignored.
pub fn ptr_eq<T: ?Sized>(
    record: &mut ResultRecord,
    at: Location,
    actual: *const T,
    expected: *const T,
) -> bool {
    let actual = actual.cast::<()>() as usize;
    let expected = expected.cast::<()>() as usize;
    compare(
        record,
        at,
        actual == expected,
        Value::Ptr(expected),
        Value::Ptr(actual),
    )
}

#[cfg(feature = "long")]
pub fn long_eq(record: &mut ResultRecord, at: Location, actual: c_long, expected: c_long) -> bool {
    compare(
        record,
        at,
        actual == expected,
        Value::Long(expected),
        Value::Long(actual),
    )
}

#[cfg(feature = "long")]
pub fn ulong_eq(
    record: &mut ResultRecord,
    at: Location,
    actual: c_ulong,
    expected: c_ulong,
) -> bool {
    compare(
        record,
        at,
        actual == expected,
        Value::ULong(expected),
        Value::ULong(actual),
    )
}

#[cfg(feature = "longlong")]
pub fn longlong_eq(
    record: &mut ResultRecord,
    at: Location,
    actual: c_longlong,
    expected: c_longlong,
) -> bool {
    compare(
        record,
        at,
        actual == expected,
        Value::LongLong(expected),
        Value::LongLong(actual),
    )
}

#[cfg(feature = "longlong")]
pub fn ulonglong_eq(
    record: &mut ResultRecord,
    at: Location,
    actual: c_ulonglong,
    expected: c_ulonglong,
) -> bool {
    compare(
        record,
        at,
        actual == expected,
        Value::ULongLong(expected),
        Value::ULongLong(actual),
    )
}

/// Passes when `|actual - expected| <= tolerance`. A NaN difference fails.
#[cfg(feature = "float")]
pub fn float_near(
    record: &mut ResultRecord,
    at: Location,
    actual: f32,
    expected: f32,
    tolerance: f32,
) -> bool {
    let diff = actual - expected;
    let distance = if diff < 0.0 { -diff } else { diff };
    compare(
        record,
        at,
        distance <= tolerance,
        Value::Float(expected),
        Value::Float(actual),
    )
}

/// Passes when `|actual - expected| <= tolerance`. A NaN difference fails.
#[cfg(feature = "double")]
pub fn double_near(
    record: &mut ResultRecord,
    at: Location,
    actual: f64,
    expected: f64,
    tolerance: f64,
) -> bool {
    let diff = actual - expected;
    let distance = if diff < 0.0 { -diff } else { diff };
    compare(
        record,
        at,
        distance <= tolerance,
        Value::Double(expected),
        Value::Double(actual),
    )
}

/// Location of the macro invocation.
#[macro_export]
macro_rules! here {
    () => {
        $crate::Location::new(file!(), line!())
    };
}

/// Record an unconditional failure and return from the test case.
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {{
        $result.fail($crate::here!(), $crate::Value::None, $crate::Value::None);
        return;
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_or_return {
    ($check:ident, $result:expr, $($arg:expr),+) => {
        if !$crate::check::$check($result, $crate::here!(), $($arg),+) {
            return;
        }
    };
}

/// Assert that two `i32` values are equal.
#[macro_export]
macro_rules! assert_ieq {
    ($result:expr, $act:expr, $exp:expr $(,)?) => {
        $crate::__check_or_return!(int_eq, $result, $act, $exp)
    };
}

/// Assert that two `u32` values are equal.
#[macro_export]
macro_rules! assert_ueq {
    ($result:expr, $act:expr, $exp:expr $(,)?) => {
        $crate::__check_or_return!(uint_eq, $result, $act, $exp)
    };
}

/// Assert that two pointers hold the same address.
#[macro_export]
macro_rules! assert_peq {
    ($result:expr, $act:expr, $exp:expr $(,)?) => {
        $crate::__check_or_return!(ptr_eq, $result, $act, $exp)
    };
}

/// Assert that two `c_long` values are equal.
#[cfg(feature = "long")]
#[macro_export]
macro_rules! assert_leq {
    ($result:expr, $act:expr, $exp:expr $(,)?) => {
        $crate::__check_or_return!(long_eq, $result, $act, $exp)
    };
}

/// Assert that two `c_ulong` values are equal.
#[cfg(feature = "long")]
#[macro_export]
macro_rules! assert_uleq {
    ($result:expr, $act:expr, $exp:expr $(,)?) => {
        $crate::__check_or_return!(ulong_eq, $result, $act, $exp)
    };
}

/// Assert that two `c_longlong` values are equal.
#[cfg(feature = "longlong")]
#[macro_export]
macro_rules! assert_lleq {
    ($result:expr, $act:expr, $exp:expr $(,)?) => {
        $crate::__check_or_return!(longlong_eq, $result, $act, $exp)
    };
}

/// Assert that two `c_ulonglong` values are equal.
#[cfg(feature = "longlong")]
#[macro_export]
macro_rules! assert_ulleq {
    ($result:expr, $act:expr, $exp:expr $(,)?) => {
        $crate::__check_or_return!(ulonglong_eq, $result, $act, $exp)
    };
}

/// Assert that two `f32` values are equal within a tolerance.
#[cfg(feature = "float")]
#[macro_export]
macro_rules! assert_feq {
    ($result:expr, $act:expr, $exp:expr, $tol:expr $(,)?) => {
        $crate::__check_or_return!(float_near, $result, $act, $exp, $tol)
    };
}

/// Assert that two `f64` values are equal within a tolerance.
#[cfg(feature = "double")]
#[macro_export]
macro_rules! assert_deq {
    ($result:expr, $act:expr, $exp:expr, $tol:expr $(,)?) => {
        $crate::__check_or_return!(double_near, $result, $act, $exp, $tol)
    };
}
