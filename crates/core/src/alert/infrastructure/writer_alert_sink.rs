use std::io::Write;

use crate::alert::domain::alert_sink::AlertSink;
use crate::tracking::domain::attention_tracker::StatusEvent;

/// Serializes each status event as one JSON line onto any writer.
///
/// This is the wire shape a socket transport relays back to a browser
/// client; pointing it at stdout gives a machine-readable replay feed.
pub struct WriterAlertSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterAlertSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> AlertSink for WriterAlertSink<W> {
    fn deliver(&mut self, event: &StatusEvent) {
        // Serialization of StatusEvent cannot fail; a broken pipe is the
        // host's problem and must not take the monitor down.
        if let Ok(json) = serde_json::to_string(event) {
            if let Err(e) = writeln!(self.writer, "{json}") {
                log::warn!("failed to write status event: {e}");
            }
        }
    }
}
