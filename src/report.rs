//! Result callback contract and a ready-made logging sink.

use crate::record::ResultRecord;

/// Reporting sink invoked once per completed unit with the pass flag, the
/// composed message and the result record.
///
/// It runs synchronously inside the sequencer's report phase and must return
/// promptly.
pub type ResultCallback = fn(bool, &str, &ResultRecord);

/// Log each unit's result through the `log` facade.
///
/// Passes go to `info`, failures to `error` together with the operands that
/// triggered them.
pub fn log_result(passed: bool, message: &str, record: &ResultRecord) {
    if passed {
        info!("{}", message);
        return;
    }

    match record.failure() {
        Some(failure) if !failure.expected.is_none() => error!(
            "{} (expected {} {}, got {})",
            message,
            failure.expected.kind(),
            failure.expected,
            failure.actual
        ),
        _ => error!("{}", message),
    }
}
