//! Reporting of values that could not be converted.
//!
//! Converters never fail outward; instead they hand the offending value and
//! the name of the type they were converting to a [`ConvertLog`] sink and
//! return a fallback.
//!
//! Sink resolution, first match wins:
//! - a sink installed for the current thread with [`with_sink`];
//! - the process-wide sink installed with [`set_sink`];
//! - [`TracingLog`], which emits a `tracing` error event.
//!
//! Reporting is fire-and-forget: it never panics and never waits on a sink
//! being swapped for longer than the swap itself.

use std::{
    cell::RefCell,
    sync::{Arc, OnceLock},
};

use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use crate::error::ConvertError;

/// Receiver for conversion diagnostics.
pub trait ConvertLog: Send + Sync {
    /// Record that `value` could not be converted to `type_name`.
    fn convert_error(&self, value: &Value, type_name: &str);
}

/// Default sink: emits an error event on the `propconv::convert` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ConvertLog for TracingLog {
    fn convert_error(&self, value: &Value, type_name: &str) {
        tracing::error!(
            target: "propconv::convert",
            value = %value,
            type_name,
            "JSON value is not a valid {}",
            type_name
        );
    }
}

/// Sink that keeps every reported pair in memory, for inspection.
#[derive(Debug, Default)]
pub struct RecordingLog {
    /// Reported `(value, type_name)` pairs in arrival order.
    entries: Mutex<Vec<(Value, String)>>,
}

impl RecordingLog {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded pairs.
    pub fn entries(&self) -> Vec<(Value, String)> {
        self.entries.lock().clone()
    }

    /// Names of the types that failed, in arrival order.
    pub fn type_names(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, t)| t.clone()).collect()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl ConvertLog for RecordingLog {
    fn convert_error(&self, value: &Value, type_name: &str) {
        self.entries
            .lock()
            .push((value.clone(), type_name.to_string()));
    }
}

/// Process-wide sink slot.
static LOG_SINK: OnceLock<RwLock<Option<Arc<dyn ConvertLog>>>> = OnceLock::new();

thread_local! {
    /// Sink scoped to the current thread by [`with_sink`].
    static SCOPED_SINK: RefCell<Option<Arc<dyn ConvertLog>>> = const { RefCell::new(None) };
}

/// Access the process-wide sink slot.
fn sink() -> &'static RwLock<Option<Arc<dyn ConvertLog>>> {
    LOG_SINK.get_or_init(|| RwLock::new(None))
}

/// Install the process-wide sink, replacing any previous one.
pub fn set_sink(log: Arc<dyn ConvertLog>) {
    *sink().write() = Some(log);
}

/// Remove the process-wide sink; reports fall back to [`TracingLog`].
pub fn clear_sink() {
    *sink().write() = None;
}

/// Run `f` with `log` receiving every diagnostic reported on this thread.
///
/// The previous scoped sink is restored afterwards, so calls nest.
pub fn with_sink<R>(log: Arc<dyn ConvertLog>, f: impl FnOnce() -> R) -> R {
    /// Restores the previous scoped sink on drop, including on unwind.
    struct Restore(Option<Arc<dyn ConvertLog>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let prev = self.0.take();
            let _ignored = SCOPED_SINK.try_with(|slot| {
                if let Ok(mut slot) = slot.try_borrow_mut() {
                    *slot = prev;
                }
            });
        }
    }

    let prev = SCOPED_SINK.with(|slot| slot.replace(Some(log)));
    let _restore = Restore(prev);
    f()
}

/// The sink that should receive a report made on this thread right now.
fn current_sink() -> Arc<dyn ConvertLog> {
    let scoped = SCOPED_SINK
        .try_with(|slot| slot.try_borrow().ok().and_then(|s| s.clone()))
        .ok()
        .flatten();
    if let Some(log) = scoped {
        return log;
    }
    if let Some(log) = sink().read().clone() {
        return log;
    }
    Arc::new(TracingLog)
}

/// Report that `value` is not a valid `type_name`.
pub fn report(value: &Value, type_name: &str) {
    current_sink().convert_error(value, type_name);
}

/// Report a failed conversion together with the reason it failed.
///
/// The reason goes to a `debug` trace; the sink receives the value and type.
pub(crate) fn report_error(value: &Value, type_name: &str, err: &ConvertError) {
    tracing::debug!(target: "propconv::convert", type_name, error = %err, "conversion failed");
    report(value, type_name);
}

#[cfg(test)]
mod tests {
    use std::{
        panic::{AssertUnwindSafe, catch_unwind},
        sync::Arc,
    };

    use serde_json::json;

    use super::*;

    #[test]
    fn scoped_sink_receives_reports_and_is_restored() {
        let outer = Arc::new(RecordingLog::new());
        let inner = Arc::new(RecordingLog::new());

        with_sink(outer.clone(), || {
            report(&json!("a"), "Outer");
            with_sink(inner.clone(), || report(&json!(1), "Inner"));
            report(&json!(true), "Outer");
        });

        assert_eq!(outer.type_names(), vec!["Outer", "Outer"]);
        assert_eq!(inner.entries(), vec![(json!(1), "Inner".to_string())]);
    }

    #[test]
    fn scoped_sink_restored_after_panic() {
        let log = Arc::new(RecordingLog::new());
        let res = catch_unwind(AssertUnwindSafe(|| {
            with_sink(log.clone(), || panic!("boom"));
        }));
        assert!(res.is_err());

        let after = Arc::new(RecordingLog::new());
        with_sink(after.clone(), || report(&json!(null), "After"));
        assert_eq!(after.len(), 1);
        assert!(log.is_empty());
    }
}
