//! Per-suite outcome counters.

/// Outcome of one reported unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    /// The unit started with a failure already latched by an earlier unit.
    Skipped,
}

// Test statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl TestStats {
    pub const fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    pub fn add_result(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl Default for TestStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_outcome() {
        let mut stats = TestStats::new();
        stats.add_result(Outcome::Passed);
        stats.add_result(Outcome::Failed);
        stats.add_result(Outcome::Skipped);
        stats.add_result(Outcome::Skipped);

        assert_eq!(
            stats,
            TestStats {
                total: 4,
                passed: 1,
                failed: 1,
                skipped: 2,
            }
        );
        assert!(!stats.all_passed());
        assert!(TestStats::new().all_passed());
    }
}
