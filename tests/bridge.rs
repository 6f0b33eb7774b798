//! Exercises the tracing bridge end to end in its own process.

#![cfg(feature = "tracing-bridge")]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use structlog::{LoggerConfig, LoggerFormat, TracingBridge, WriteSyncer};
use tracing_subscriber::layer::SubscriberExt;

#[derive(Clone, Default)]
struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    fn contents(&self) -> String {
        let inner = self.inner.lock().expect("buffer lock");
        String::from_utf8_lossy(&inner).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .expect("buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteSyncer for SharedBuffer {}

#[test]
fn tracing_events_reach_default_logger() {
    let subscriber = tracing_subscriber::registry().with(TracingBridge::new());

    // Before initialization the bridge drops events instead of panicking.
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("dropped");
    });

    let buffer = SharedBuffer::default();
    structlog::init(LoggerConfig {
        format: LoggerFormat::Json,
        syncer: Some(Box::new(buffer.clone())),
        ..Default::default()
    })
    .expect("failed to initialize logger");

    let subscriber = tracing_subscriber::registry().with(TracingBridge::new());
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(user = "alice", attempts = 3, "login ok");
    });

    let contents = buffer.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one record: {contents:?}");

    let rec: Value = serde_json::from_str(lines[0]).expect("well-formed json line");
    assert_eq!(rec["msg"], "login ok");
    assert_eq!(rec["level"], "info");
    assert_eq!(rec["user"], "alice");
    assert_eq!(rec["attempts"], 3);
    let caller = rec["caller"].as_str().expect("caller present");
    assert!(caller.contains("bridge.rs:"), "caller was {caller:?}");
}
