//! Suite units: test cases, driver tasks and their pairing.

use crate::record::ResultRecord;

/// Signature shared by test cases and driver tasks.
pub type TestFn = fn(&mut ResultRecord);

/// A named test case or driver task.
#[derive(Clone, Copy)]
pub struct Routine {
    pub name: &'static str,
    pub func: TestFn,
}

impl Routine {
    pub const fn new(name: &'static str, func: TestFn) -> Self {
        Self { name, func }
    }

    /// Label the record with this routine's name and run it once.
    pub fn invoke(&self, record: &mut ResultRecord) {
        record.set_label(self.name);
        (self.func)(record);
    }
}

impl core::fmt::Debug for Routine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Routine").field(&self.name).finish()
    }
}

/// One step of a suite: an optional driver task run up to `repeat` times,
/// followed by one test case.
#[derive(Debug, Clone, Copy)]
pub struct Unit {
    pub task: Option<Routine>,
    pub repeat: u32,
    pub case: Routine,
}

impl Unit {
    pub const fn new(task: Option<Routine>, repeat: u32, case: Routine) -> Self {
        Self { task, repeat, case }
    }

    /// A unit without a driver task.
    pub const fn case(case: Routine) -> Self {
        Self::new(None, 0, case)
    }

    /// A unit whose case is preceded by `repeat` invocations of `task`.
    pub const fn driven(task: Routine, repeat: u32, case: Routine) -> Self {
        Self::new(Some(task), repeat, case)
    }
}

/// Build a [`Routine`] named after the function identifier.
#[macro_export]
macro_rules! routine {
    ($func:ident) => {
        $crate::Routine::new(stringify!($func), $func)
    };
}

/// Build a `&'static [Unit]` from a list of cases.
///
/// ```rust,ignore
/// static UNITS: &[Unit] = units![
///     case_a,
///     case_b after task_b * 10,
/// ];
/// ```
#[macro_export]
macro_rules! units {
    ($($case:ident $(after $task:ident * $repeat:expr)?),* $(,)?) => {
        &[$($crate::__unit!($case $(, $task, $repeat)?)),*]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit {
    ($case:ident) => {
        $crate::Unit::case($crate::routine!($case))
    };
    ($case:ident, $task:ident, $repeat:expr) => {
        $crate::Unit::driven($crate::routine!($task), $repeat, $crate::routine!($case))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn case_a(result: &mut ResultRecord) {
        crate::assert_ieq!(result, -1, -1);
    }

    fn case_b(result: &mut ResultRecord) {
        crate::assert_ieq!(result, 0, 1);
    }

    fn task_b(_result: &mut ResultRecord) {}

    static UNITS: &[Unit] = units![case_a, case_b after task_b * 10];

    #[test]
    fn units_macro_keeps_order_and_names() {
        assert_eq!(UNITS.len(), 2);
        assert_eq!(UNITS[0].case.name, "case_a");
        assert!(UNITS[0].task.is_none());
        assert_eq!(UNITS[0].repeat, 0);

        assert_eq!(UNITS[1].case.name, "case_b");
        assert_eq!(UNITS[1].task.map(|t| t.name), Some("task_b"));
        assert_eq!(UNITS[1].repeat, 10);
    }

    #[test]
    fn invoke_labels_before_running() {
        let mut record = ResultRecord::new();
        UNITS[1].case.invoke(&mut record);

        assert_eq!(record.label(), "case_b");
        assert_eq!(record.actual(), Value::Int(0));
    }
}
