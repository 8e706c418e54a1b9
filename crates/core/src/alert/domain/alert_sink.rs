use crate::tracking::domain::attention_tracker::StatusEvent;

/// Domain interface for delivering status events to the outside world.
///
/// Decouples the tracking pipeline from the delivery mechanism (socket
/// emit, on-screen overlay, audio beep) so hosts can swap transports
/// without touching the classification code.
pub trait AlertSink: Send {
    fn deliver(&mut self, event: &StatusEvent);
}

/// Sink that discards every event. Used by tests where delivery is
/// irrelevant.
pub struct NullAlertSink;

impl AlertSink for NullAlertSink {
    fn deliver(&mut self, _event: &StatusEvent) {}
}
