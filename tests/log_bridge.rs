//! Forwarding colfmt log records into `tracing`.

#![cfg(feature = "unicode")]

use colfmt::{FormatSpec, LogLevel, clear_log_callback, set_log_callback, write_unicode};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

#[test]
fn truncation_is_logged_through_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let records = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&records);
    set_log_callback(move |level, msg| {
        match level {
            LogLevel::Debug => debug!(target: "colfmt", "{msg}"),
            LogLevel::Info => info!(target: "colfmt", "{msg}"),
            LogLevel::Warn => warn!(target: "colfmt", "{msg}"),
            LogLevel::Error => error!(target: "colfmt", "{msg}"),
        }
        sink.lock().unwrap().push((level, msg.to_string()));
    });

    let mut out: Vec<u8> = Vec::new();
    write_unicode(b"hello", &mut out, &FormatSpec::new().with_precision(3)).unwrap();
    // Fits: nothing to report.
    write_unicode(b"hi", &mut out, &FormatSpec::new().with_precision(3)).unwrap();
    // Truncated after the wide-character scan.
    write_unicode("a漢字".as_bytes(), &mut out, &FormatSpec::new().with_precision(3)).unwrap();
    clear_log_callback();
    write_unicode(b"dropped", &mut out, &FormatSpec::new().with_precision(1)).unwrap();

    let records = records.lock().unwrap();
    assert_eq!(
        *records,
        vec![
            (
                LogLevel::Debug,
                "precision truncated text from 5 to 3 elements".to_string()
            ),
            (
                LogLevel::Debug,
                "precision truncated text from 7 to 4 elements".to_string()
            ),
        ]
    );
}
