//! Thread-local log capture for unit tests.
//!
//! The `log` facade allows a single global logger per process, and the test
//! harness runs tests on parallel threads, so records are buffered per
//! thread. Call [`capture_logs`] at the top of a test, then inspect with
//! [`take_logs`].

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger (once per process) and clear this thread's
/// buffer.
pub(crate) fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Drain every record logged on this thread since [`capture_logs`].
pub(crate) fn take_logs() -> Vec<(Level, String)> {
    RECORDS.with(|records| std::mem::take(&mut *records.borrow_mut()))
}

/// Drain the buffer and count records at exactly `level`.
pub(crate) fn count_logs(level: Level) -> usize {
    take_logs().iter().filter(|(l, _)| *l == level).count()
}
