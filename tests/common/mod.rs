//! Shared test utilities for all integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

pub use docpath::{DocKey, DocPath, KeyBytes, PrimitiveValue};
use tracing_subscriber::fmt::MakeWriter;

// ============================================================================
// Fixtures
// ============================================================================

/// Encoded key of a range-only document named `name`
pub fn doc_key(name: &str) -> KeyBytes {
    DocKey::new(vec![PrimitiveValue::string(name)]).encode()
}

/// String subkey shorthand
pub fn s(value: &str) -> PrimitiveValue {
    PrimitiveValue::string(value)
}

// ============================================================================
// Log capture
// ============================================================================

/// In-memory log sink for asserting on emitted tracing events
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber writing every level into the returned sink
pub fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs)
}
