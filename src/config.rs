//! Compile-time configuration constants.

/// Capacity of the report message buffer in bytes.
pub const MESSAGE_CAPACITY: usize = 128;

pub const MSG_TEST: &str = "Test ";
pub const MSG_PASSED: &str = " passed";
pub const MSG_FAILED: &str = " failed";
pub const MSG_ASSERTION_FAILED: &str = ": assertion failed at ";
