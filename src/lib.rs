//! Resumable unit test sequencer for cooperative embedded main loops.
//!
//! A suite is an ordered list of units, each an optional driver task repeated a
//! bounded number of times followed by one test case. The sequencer executes a
//! suite one bounded step per call, so a bare-metal `main` loop can interleave
//! test execution with its other duties:
//!
//! ```rust,ignore
//! use stepunit::{assert_ieq, case, suite};
//!
//! #[case]
//! fn case_a() {
//!     assert_ieq!(result, -1, -1);
//! }
//!
//! fn report(_passed: bool, message: &str, _record: &stepunit::ResultRecord) {
//!     log::info!("{}", message);
//! }
//!
//! suite! {
//!     pub fn test_suite => report {
//!         case_a,
//!     }
//! }
//!
//! loop {
//!     if test_suite() {
//!         break;
//!     }
//!     feed_watchdog();
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

pub mod check;
pub mod config;
pub mod message;
pub mod record;
pub mod report;
pub mod runner;
pub mod sequencer;
pub mod stats;
pub mod sync;
pub mod unit;
pub mod value;

// Re-export the attribute macros from stepunit-macros crate
pub use stepunit_macros::{case, task};

// Re-export commonly used types
pub use record::{Failure, Location, ResultRecord};
pub use report::{ResultCallback, log_result};
pub use runner::{Runner, StaticSuite, run_until_complete};
pub use sequencer::{LatchPolicy, Phase, Position, Progress, Suite};
pub use stats::{Outcome, TestStats};
pub use unit::{Routine, TestFn, Unit};
pub use value::Value;
