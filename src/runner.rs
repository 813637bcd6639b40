//! Suite driver loops.
//!
//! [`Runner`] pairs a suite with progress owned by the caller, [`StaticSuite`]
//! keeps its progress behind a spin lock so a whole suite can live in a
//! `static` and be polled from a bare-metal main loop.

use crate::record::ResultRecord;
use crate::report::ResultCallback;
use crate::sequencer::{Progress, Suite};
use crate::stats::TestStats;
use crate::sync::Mutex;

/// Call `step` until it reports completion.
///
/// Returns the number of calls made, including the final one.
pub fn run_until_complete(mut step: impl FnMut() -> bool) -> u32 {
    let mut advances: u32 = 1;
    while !step() {
        advances = advances.saturating_add(1);
    }
    advances
}

fn print_final_stats(stats: &TestStats) {
    warn!(
        "  >>> Test results: {} passed, {} failed, {} skipped, {} total",
        stats.passed, stats.failed, stats.skipped, stats.total
    );

    if stats.all_passed() {
        warn!("  >>> This suite PASSED!");
    } else {
        error!("  >>> This suite FAILED!");
    }
}

/// A suite together with the progress of one run.
pub struct Runner<'s, C = ResultCallback> {
    suite: &'s Suite<'s, C>,
    progress: Progress,
}

impl<'s, C> Runner<'s, C>
where
    C: Fn(bool, &str, &ResultRecord),
{
    pub fn new(suite: &'s Suite<'s, C>) -> Self {
        Self {
            suite,
            progress: Progress::new(),
        }
    }

    /// Perform one bounded step. Returns `true` once the suite is complete.
    pub fn advance(&mut self) -> bool {
        self.suite.step(&mut self.progress)
    }

    /// Advance until completion and log the final statistics.
    pub fn run_to_completion(&mut self) -> TestStats {
        self.run_interleaved(|| {})
    }

    /// Advance until completion, calling `between` after every step that did
    /// not complete the suite.
    pub fn run_interleaved(&mut self, mut between: impl FnMut()) -> TestStats {
        warn!("Starting suite with {} units...", self.suite.len());
        while !self.advance() {
            between();
        }

        let stats = self.progress.stats();
        print_final_stats(&stats);
        stats
    }

    /// Discard the current run and start over from the first unit.
    pub fn restart(&mut self) {
        self.progress = Progress::new();
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn record(&self) -> &ResultRecord {
        self.progress.record()
    }

    pub fn stats(&self) -> TestStats {
        self.progress.stats()
    }

    pub fn is_done(&self) -> bool {
        self.progress.is_done()
    }

    pub fn steps(&self) -> u32 {
        self.progress.steps()
    }
}

/// A suite whose progress lives alongside its definition.
///
/// The callback runs while the progress lock is held; it must not advance the
/// same suite.
pub struct StaticSuite<C = ResultCallback> {
    suite: Suite<'static, C>,
    progress: Mutex<Progress>,
}

impl<C> StaticSuite<C> {
    pub const fn new(suite: Suite<'static, C>) -> Self {
        Self {
            suite,
            progress: Mutex::new(Progress::new()),
        }
    }
}

impl<C> StaticSuite<C>
where
    C: Fn(bool, &str, &ResultRecord),
{
    /// Perform one bounded step. Returns `true` once the suite is complete.
    pub fn advance(&self) -> bool {
        let mut progress = self.progress.lock();
        self.suite.step(&mut progress)
    }

    /// Advance until completion and log the final statistics.
    pub fn run_to_completion(&self) -> TestStats {
        run_until_complete(|| self.advance());

        let stats = self.stats();
        print_final_stats(&stats);
        stats
    }

    /// Re-initialize the progress so the suite runs again from its first unit.
    pub fn restart(&self) {
        *self.progress.lock() = Progress::new();
    }

    pub fn stats(&self) -> TestStats {
        self.progress.lock().stats()
    }

    pub fn is_done(&self) -> bool {
        self.progress.lock().is_done()
    }

    /// Inspect the current progress under the lock.
    pub fn with_progress<R>(&self, f: impl FnOnce(&Progress) -> R) -> R {
        f(&*self.progress.lock())
    }
}

/// Define a zero-argument suite function backed by a [`StaticSuite`].
///
/// Each call of the generated function performs one step and returns `true`
/// once the suite has completed.
///
/// ```rust,ignore
/// suite! {
///     pub fn test_suite => report {
///         case_a,
///         case_b after task_b * 10,
///     }
/// }
///
/// while !test_suite() {}
/// ```
#[macro_export]
macro_rules! suite {
    ($(#[$attr:meta])* $vis:vis fn $name:ident => $callback:path { $($units:tt)* }) => {
        $(#[$attr])*
        $vis fn $name() -> bool {
            const UNITS: &[$crate::Unit] = $crate::units![$($units)*];
            static SUITE: $crate::StaticSuite =
                $crate::StaticSuite::new($crate::Suite::with_callback(UNITS, $callback));
            SUITE.advance()
        }
    };
    ($(#[$attr:meta])* $vis:vis fn $name:ident { $($units:tt)* }) => {
        $(#[$attr])*
        $vis fn $name() -> bool {
            const UNITS: &[$crate::Unit] = $crate::units![$($units)*];
            static SUITE: $crate::StaticSuite = $crate::StaticSuite::new($crate::Suite::new(UNITS));
            SUITE.advance()
        }
    };
}
