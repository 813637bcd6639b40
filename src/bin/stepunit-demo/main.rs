//! stepunit demo: runs an example suite from a polling main loop.

mod logger;

#[macro_use]
extern crate log;

use std::sync::atomic::{AtomicU32, Ordering};

use stepunit::{ResultRecord, assert_deq, assert_ieq, assert_ueq, case, suite, task};

/// Result type alias using anyhow::Error.
pub type DemoResult<T> = anyhow::Result<T>;

static COUNTER: AtomicU32 = AtomicU32::new(0);
static WATCHDOG_FEEDS: AtomicU32 = AtomicU32::new(0);

#[case]
fn case_a() {
    assert_ieq!(result, -1, -1);
}

#[task]
fn task_b() {
    COUNTER.fetch_add(1, Ordering::Relaxed);
}

#[case]
fn case_b() {
    assert_ueq!(result, COUNTER.load(Ordering::Relaxed), 10);
}

#[case]
fn case_c() {
    assert_ieq!(result, 1, 1);
    assert_ieq!(result, 0, 1);
}

#[case]
fn case_d(record: &mut ResultRecord) {
    assert_deq!(record, 0.1 + 0.2, 0.3, 1e-9);
}

fn test_suite_callback(passed: bool, message: &str, record: &ResultRecord) {
    println!("{message}");
    if !passed {
        debug!(
            "expected {}, actual {}",
            record.expected(),
            record.actual()
        );
    }
}

suite! {
    fn test_suite => test_suite_callback {
        case_a,
        case_b after task_b * 10,
        case_d,
        case_c,
    }
}

fn feed_watchdog() {
    WATCHDOG_FEEDS.fetch_add(1, Ordering::Relaxed);
}

fn main() -> DemoResult<()> {
    logger::init()?;

    let advances = stepunit::run_until_complete(|| {
        let done = test_suite();
        feed_watchdog();
        done
    });

    info!(
        "suite completed after {} steps, watchdog fed {} times",
        advances,
        WATCHDOG_FEEDS.load(Ordering::Relaxed)
    );
    Ok(())
}
