//! Resumable suite sequencer.
//!
//! A suite is executed as an explicit state machine over `unit index × phase`.
//! Every call of [`Suite::step`] performs exactly one transition's worth of
//! work on a [`Progress`] and returns whether the suite has completed:
//!
//! ```text
//! Driver --(repeat left, no failure)--> Driver
//! Driver --(exhausted / skipped)------> Test
//! Test   ----------------------------> Report
//! Report --(more units)--------------> next unit's Driver
//! Report --(last unit)---------------> Done
//! ```
//!
//! No stack is retained between calls; all position information lives in the
//! [`Progress`], which the caller owns.

use core::fmt::Write;

use crate::config::{MSG_ASSERTION_FAILED, MSG_FAILED, MSG_PASSED, MSG_TEST};
use crate::message::MessageBuffer;
use crate::record::ResultRecord;
use crate::report::ResultCallback;
use crate::stats::{Outcome, TestStats};
use crate::unit::Unit;

/// Phase within one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Driver,
    Test,
    Report,
}

/// Resumption point of a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    At { unit: usize, phase: Phase },
    Done,
}

impl Position {
    pub const START: Position = Position::At {
        unit: 0,
        phase: Phase::Driver,
    };
}

/// What happens to a latched failure when the sequencer moves to the next unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatchPolicy {
    /// The failure stays latched for the rest of the run. Later units skip
    /// their driver task and test case and report the stale failure.
    #[default]
    Sticky,
    /// The latch is cleared before the next unit starts.
    ResetPerUnit,
}

/// Mutable state of one suite run.
#[derive(Debug, Clone)]
pub struct Progress {
    position: Position,
    repetitions: u32,
    /// The latch was already set when the current unit entered its driver
    /// phase, so this unit's report is a stale one.
    latched_on_entry: bool,
    steps: u32,
    record: ResultRecord,
    message: MessageBuffer,
    stats: TestStats,
}

impl Progress {
    pub const fn new() -> Self {
        Self {
            position: Position::START,
            repetitions: 0,
            latched_on_entry: false,
            steps: 0,
            record: ResultRecord::new(),
            message: MessageBuffer::new(),
            stats: TestStats::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_done(&self) -> bool {
        self.position == Position::Done
    }

    /// Driver task invocations performed for the current unit.
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Number of advances that performed a transition. Advances on a finished
    /// suite are not counted.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn record(&self) -> &ResultRecord {
        &self.record
    }

    /// The most recently composed report message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn stats(&self) -> TestStats {
        self.stats
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable suite definition: ordered units plus an optional callback.
pub struct Suite<'a, C = ResultCallback> {
    units: &'a [Unit],
    callback: Option<C>,
    latch: LatchPolicy,
}

impl<'a> Suite<'a> {
    /// A suite that reports to no one.
    pub const fn new(units: &'a [Unit]) -> Self {
        Self {
            units,
            callback: None,
            latch: LatchPolicy::Sticky,
        }
    }
}

impl<'a, C> Suite<'a, C> {
    pub const fn with_callback(units: &'a [Unit], callback: C) -> Self {
        Self {
            units,
            callback: Some(callback),
            latch: LatchPolicy::Sticky,
        }
    }

    pub const fn latch_policy(mut self, latch: LatchPolicy) -> Self {
        self.latch = latch;
        self
    }

    pub fn units(&self) -> &'a [Unit] {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<C> Suite<'_, C>
where
    C: Fn(bool, &str, &ResultRecord),
{
    /// Advance `progress` by one transition.
    ///
    /// Returns `true` once the suite has completed. A finished suite is left
    /// untouched by further calls, which keep returning `true`.
    pub fn step(&self, progress: &mut Progress) -> bool {
        let (index, phase) = match progress.position {
            Position::Done => return true,
            Position::At { unit, phase } => (unit, phase),
        };

        let Some(unit) = self.units.get(index) else {
            trace!("suite has no unit {}, done", index);
            progress.position = Position::Done;
            progress.steps = progress.steps.saturating_add(1);
            return true;
        };

        trace!("step {}: unit {} {:?}", progress.steps, index, phase);
        progress.steps = progress.steps.saturating_add(1);

        match phase {
            Phase::Driver => {
                self.drive(index, unit, progress);
                false
            }
            Phase::Test => {
                self.test(index, unit, progress);
                false
            }
            Phase::Report => self.report(index, progress),
        }
    }

    fn drive(&self, index: usize, unit: &Unit, progress: &mut Progress) {
        match unit.task {
            Some(task) if progress.repetitions < unit.repeat && !progress.record.is_latched() => {
                debug!(
                    "running task {} ({}/{})",
                    task.name,
                    progress.repetitions + 1,
                    unit.repeat
                );
                task.invoke(&mut progress.record);
                progress.repetitions += 1;
            }
            _ => {
                progress.position = Position::At {
                    unit: index,
                    phase: Phase::Test,
                };
            }
        }
    }

    fn test(&self, index: usize, unit: &Unit, progress: &mut Progress) {
        if progress.record.is_latched() {
            debug!("skipping case {}, failure already latched", unit.case.name);
        } else {
            debug!("running case {}", unit.case.name);
            unit.case.invoke(&mut progress.record);
        }
        progress.position = Position::At {
            unit: index,
            phase: Phase::Report,
        };
    }

    fn report(&self, index: usize, progress: &mut Progress) -> bool {
        let record = &progress.record;
        let passed = !record.is_latched();

        progress.message.clear();
        progress.message.write_str(MSG_TEST).ok();
        progress.message.write_str(record.label()).ok();
        if passed {
            progress.message.write_str(MSG_PASSED).ok();
        } else {
            progress.message.write_str(MSG_FAILED).ok();
            progress.message.write_str(MSG_ASSERTION_FAILED).ok();
            if let Some(location) = record.location() {
                write!(progress.message, "{}", location).ok();
            }
        }

        if let Some(callback) = &self.callback {
            callback(passed, progress.message.as_str(), record);
        }

        let outcome = match (passed, progress.latched_on_entry) {
            (true, _) => Outcome::Passed,
            (false, false) => Outcome::Failed,
            (false, true) => Outcome::Skipped,
        };
        progress.stats.add_result(outcome);

        progress.repetitions = 0;

        let next = index + 1;
        if next >= self.units.len() {
            progress.position = Position::Done;
            return true;
        }

        if self.latch == LatchPolicy::ResetPerUnit && progress.record.is_latched() {
            debug!("clearing latched failure before unit {}", next);
            progress.record.clear_failure();
        }
        progress.latched_on_entry = progress.record.is_latched();
        progress.position = Position::At {
            unit: next,
            phase: Phase::Driver,
        };
        false
    }
}
