//! The `precondition violated` debug event.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn events(&self) -> Vec<serde_json::Value> {
        let bytes = self.buf.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl std::io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture() -> (CaptureWriter, tracing::subscriber::DefaultGuard) {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .json()
        .finish();
    (writer, tracing::subscriber::set_default(subscriber))
}

#[test]
fn violation_emits_one_debug_event() {
    let (writer, _guard) = capture();

    let _ = require::min_length("hunter2", 12, "password");

    let events = writer.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event["level"], "DEBUG");
    assert_eq!(event["fields"]["message"], "precondition violated");
    assert_eq!(event["fields"]["label"], "password");
    assert_eq!(event["fields"]["code"], "too_short");
}

#[test]
fn event_never_carries_the_candidate() {
    let (writer, _guard) = capture();

    let _ = require::non_blank_max_length("s3cr3t-token-value", 4, "token");

    let raw = serde_json::to_string(&writer.events()).unwrap();
    assert!(!raw.contains("s3cr3t"));
    assert!(raw.contains("length_out_of_range"));
}

#[test]
fn passing_checks_are_silent() {
    let (writer, _guard) = capture();

    require::non_null(Some(1), "id").unwrap();
    require::greater_than_zero(1, "id").unwrap();
    require::non_blank("x", "id").unwrap();

    assert!(writer.events().is_empty());
}
