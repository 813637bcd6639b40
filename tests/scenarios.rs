//! End-to-end suite runs through the public API.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU32, Ordering};

use stepunit::{
    LatchPolicy, ResultRecord, Runner, Suite, Unit, Value, assert_ieq, assert_ueq, case, task,
    units,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Default)]
struct Report {
    passed: bool,
    message: String,
    failure_line: Option<u32>,
}

fn collect(reports: &RefCell<Vec<Report>>) -> impl Fn(bool, &str, &ResultRecord) + '_ {
    move |passed, message, record| {
        reports.borrow_mut().push(Report {
            passed,
            message: message.to_string(),
            failure_line: record.failure_line(),
        })
    }
}

#[case]
fn case_a() {
    assert_ieq!(result, -1, -1);
}

#[test]
fn single_case_completes_in_three_advances() {
    init_logger();
    static UNITS: &[Unit] = units![case_a];
    let reports = RefCell::new(Vec::new());
    let suite = Suite::with_callback(UNITS, collect(&reports));
    let mut runner = Runner::new(&suite);

    assert!(!runner.advance());
    assert!(!runner.advance());
    assert!(runner.advance());

    let reports = reports.borrow();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].passed);
    assert_eq!(reports[0].message, "Test case_a passed");
}

static COUNTER: AtomicU32 = AtomicU32::new(0);
static TASK_B_CALLS: AtomicU32 = AtomicU32::new(0);
static CASE_C_SECOND_LINE: AtomicU32 = AtomicU32::new(0);
static CASE_C_PAST_SECOND: AtomicU32 = AtomicU32::new(0);

#[task]
fn task_b() {
    TASK_B_CALLS.fetch_add(1, Ordering::Relaxed);
    COUNTER.fetch_add(1, Ordering::Relaxed);
}

#[case]
fn case_b() {
    assert_ueq!(result, COUNTER.load(Ordering::Relaxed), 10);
}

#[case]
fn case_c() {
    assert_ieq!(result, 1, 1);
    let second = line!() + 2;
    CASE_C_SECOND_LINE.store(second, Ordering::Relaxed);
    assert_ieq!(result, 0, 1);
    CASE_C_PAST_SECOND.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn mixed_suite_reports_each_unit_in_order() {
    init_logger();
    static UNITS: &[Unit] = units![case_a, case_b after task_b * 10, case_c];
    let reports = RefCell::new(Vec::new());
    let suite = Suite::with_callback(UNITS, collect(&reports));
    let mut runner = Runner::new(&suite);

    let stats = runner.run_to_completion();

    assert_eq!(TASK_B_CALLS.load(Ordering::Relaxed), 10);
    assert_eq!(CASE_C_PAST_SECOND.load(Ordering::Relaxed), 0);
    // 3 + (10 + 3) + 3
    assert_eq!(runner.steps(), 19);

    let reports = reports.borrow();
    let messages: Vec<_> = reports.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages[0], "Test case_a passed");
    assert_eq!(messages[1], "Test case_b passed");

    let second_line = CASE_C_SECOND_LINE.load(Ordering::Relaxed);
    assert!(!reports[2].passed);
    assert_eq!(reports[2].failure_line, Some(second_line));
    assert_eq!(
        messages[2],
        format!(
            "Test case_c failed: assertion failed at {}:{}",
            file!(),
            second_line
        )
    );
    assert_eq!(runner.record().expected(), Value::Int(1));
    assert_eq!(runner.record().actual(), Value::Int(0));

    assert_eq!((stats.passed, stats.failed, stats.skipped), (2, 1, 0));
}

static GATED_CALLS: AtomicU32 = AtomicU32::new(0);

#[task]
fn gated_task(result: &mut ResultRecord) {
    let calls = GATED_CALLS.fetch_add(1, Ordering::Relaxed) + 1;
    assert_ueq!(result, calls, 1);
}

#[test]
fn failing_driver_task_stops_its_repetitions() {
    init_logger();
    static UNITS: &[Unit] = units![case_a after gated_task * 5];
    let reports = RefCell::new(Vec::new());
    let suite = Suite::with_callback(UNITS, collect(&reports));
    let mut runner = Runner::new(&suite);
    runner.run_to_completion();

    // the second repetition fails and latches, so no third one runs
    assert_eq!(GATED_CALLS.load(Ordering::Relaxed), 2);
    let reports = reports.borrow();
    assert!(!reports[0].passed);
    assert!(reports[0].message.starts_with("Test gated_task failed"));
    let stats = runner.stats();
    assert_eq!((stats.failed, stats.skipped), (1, 0));
}

static STALE_CALLS: AtomicU32 = AtomicU32::new(0);

#[case]
fn fails_early() {
    assert_ieq!(result, 4, 2);
}

#[case]
fn counts_calls() {
    STALE_CALLS.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn sticky_latch_reports_stale_failure_for_later_units() {
    init_logger();
    static UNITS: &[Unit] = units![fails_early, counts_calls, counts_calls];
    let reports = RefCell::new(Vec::new());
    let suite = Suite::with_callback(UNITS, collect(&reports));
    Runner::new(&suite).run_to_completion();

    assert_eq!(STALE_CALLS.load(Ordering::Relaxed), 0);
    let reports = reports.borrow();
    assert_eq!(reports.len(), 3);
    for report in reports.iter() {
        assert!(!report.passed);
        assert!(report.message.starts_with("Test fails_early failed"));
    }
}

static RESET_CALLS: AtomicU32 = AtomicU32::new(0);

#[case]
fn counts_reset_calls() {
    RESET_CALLS.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn reset_policy_runs_units_after_a_failure() {
    init_logger();
    static UNITS: &[Unit] = units![fails_early, counts_reset_calls, counts_reset_calls];
    let reports = RefCell::new(Vec::new());
    let suite =
        Suite::with_callback(UNITS, collect(&reports)).latch_policy(LatchPolicy::ResetPerUnit);
    let stats = Runner::new(&suite).run_to_completion();

    assert_eq!(RESET_CALLS.load(Ordering::Relaxed), 2);
    let passed: Vec<bool> = reports.borrow().iter().map(|r| r.passed).collect();
    assert_eq!(passed, [false, true, true]);
    assert_eq!((stats.passed, stats.failed), (2, 1));
}

#[test]
fn finished_suite_stays_finished() {
    init_logger();
    static UNITS: &[Unit] = units![case_a, case_a];
    let reports = RefCell::new(Vec::new());
    let suite = Suite::with_callback(UNITS, collect(&reports));
    let mut runner = Runner::new(&suite);
    runner.run_to_completion();
    let steps = runner.steps();

    for _ in 0..10 {
        assert!(runner.advance());
    }
    assert_eq!(runner.steps(), steps);
    assert_eq!(reports.borrow().len(), 2);
}

#[test]
fn long_labels_are_truncated_to_the_message_buffer() {
    init_logger();

    #[case]
    fn a_case_with_a_very_long_name_that_keeps_going_and_going_and_going_and_going_and_going_well_past_the_capacity_of_the_report_message_buffer() {
        assert_ieq!(result, 1, 1);
    }

    static UNITS: &[Unit] = units![
        a_case_with_a_very_long_name_that_keeps_going_and_going_and_going_and_going_and_going_well_past_the_capacity_of_the_report_message_buffer
    ];
    let reports = RefCell::new(Vec::new());
    let suite = Suite::with_callback(UNITS, collect(&reports));
    Runner::new(&suite).run_to_completion();

    let reports = reports.borrow();
    assert!(reports[0].passed);
    assert_eq!(reports[0].message.len(), stepunit::config::MESSAGE_CAPACITY);
    assert!(reports[0].message.starts_with("Test a_case_with"));
}
