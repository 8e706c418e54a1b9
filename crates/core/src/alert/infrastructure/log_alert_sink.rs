use crate::alert::domain::alert_sink::AlertSink;
use crate::tracking::domain::attention_tracker::StatusEvent;

/// Delivers status events through the `log` facade.
///
/// Newly fired alerts go out at warn level, suppressed alert repeats at
/// info, routine focused ticks at debug — so a default `RUST_LOG=warn`
/// host only hears about new distractions.
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn deliver(&mut self, event: &StatusEvent) {
        if event.alert_fired {
            log::warn!("{:?}: {}", event.state, event.message);
        } else if event.is_alert() {
            log::info!("{:?}: {}", event.state, event.message);
        } else {
            log::debug!("{:?}: {}", event.state, event.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::domain::attention_tracker::{FocusState, MSG_DISTRACTED, MSG_FOCUS_OK};

    #[test]
    fn test_delivers_every_event_shape() {
        let mut sink = LogAlertSink;
        sink.deliver(&StatusEvent {
            state: FocusState::NoFaceAlert,
            message: MSG_DISTRACTED,
            alert_fired: true,
        });
        sink.deliver(&StatusEvent {
            state: FocusState::NoFaceAlert,
            message: MSG_DISTRACTED,
            alert_fired: false,
        });
        sink.deliver(&StatusEvent {
            state: FocusState::Focused,
            message: MSG_FOCUS_OK,
            alert_fired: false,
        });
        // No panics = success; levels are routed through the log facade.
    }
}
