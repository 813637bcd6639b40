//! The result record shared by the sequencer and the routines it invokes.

use core::fmt;

use crate::value::Value;

/// Source position of an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Data of the most recently recorded assertion failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Failure {
    pub location: Location,
    pub expected: Value,
    pub actual: Value,
}

/// Single-slot failure latch plus the label of the routine that ran last.
///
/// Once a failure is recorded the latch stays set until [`clear_failure`]
/// is called. Recording another failure overwrites the location and operands
/// but never clears the latch.
///
/// [`clear_failure`]: ResultRecord::clear_failure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRecord {
    label: &'static str,
    failure: Option<Failure>,
}

impl ResultRecord {
    pub const fn new() -> Self {
        Self {
            label: "",
            failure: None,
        }
    }

    /// Name of the driver task or test case that ran last.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn set_label(&mut self, label: &'static str) {
        self.label = label;
    }

    pub fn is_latched(&self) -> bool {
        self.failure.is_some()
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn failure_line(&self) -> Option<u32> {
        self.failure.map(|f| f.location.line)
    }

    pub fn location(&self) -> Option<Location> {
        self.failure.map(|f| f.location)
    }

    pub fn expected(&self) -> Value {
        self.failure.map(|f| f.expected).unwrap_or_default()
    }

    pub fn actual(&self) -> Value {
        self.failure.map(|f| f.actual).unwrap_or_default()
    }

    /// Record an assertion failure and set the latch.
    pub fn fail(&mut self, location: Location, expected: Value, actual: Value) {
        if let Some(previous) = self.failure {
            trace!(
                "overwriting failure at {} with failure at {}",
                previous.location, location
            );
        }
        self.failure = Some(Failure {
            location,
            expected,
            actual,
        });
    }

    pub fn clear_failure(&mut self) {
        self.failure = None;
    }
}

impl Default for ResultRecord {
    fn default() -> Self {
        Self::new()
    }
}
