use std::{
    sync::{
        Arc, Barrier,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use propconv::{
    EnumConverter,
    diagnostics::{RecordingLog, with_sink},
};
use serde_json::{Value, json};

/// Times the line-style table has been built.
static BUILDS: AtomicUsize = AtomicUsize::new(0);

/// Table builder that counts its invocations.
fn line_styles() -> Vec<(&'static str, i64)> {
    BUILDS.fetch_add(1, Ordering::SeqCst);
    vec![("solid", 0), ("dashed", 1)]
}

static LINE_STYLE: EnumConverter = EnumConverter::with_builder("LineStyle", 0, line_styles);

#[test]
fn table_is_built_once_under_concurrent_first_use() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let key = if i % 2 == 0 { "solid" } else { "dashed" };
                LINE_STYLE.convert(&json!(key))
            })
        })
        .collect();

    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, raw) in results.iter().enumerate() {
        assert_eq!(*raw, (i % 2) as i64);
    }
    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);

    // Later conversions reuse the same table.
    let log = Arc::new(RecordingLog::new());
    with_sink(log.clone(), || {
        assert_eq!(LINE_STYLE.convert(&json!("dashed")), 1);
        assert_eq!(LINE_STYLE.convert(&json!("dotted")), 0);
        assert_eq!(LINE_STYLE.convert(&json!(1)), 1);
        assert_eq!(LINE_STYLE.convert(&json!(99)), 0);
        assert_eq!(LINE_STYLE.convert(&Value::Null), 0);
    });
    assert_eq!(
        log.entries(),
        vec![
            (json!("dotted"), "LineStyle".to_string()),
            (json!(99), "LineStyle".to_string()),
        ]
    );
    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
}
