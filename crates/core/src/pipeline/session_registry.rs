use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::detection::domain::detection_result::{DetectionResult, InvalidDetectionInput};
use crate::tracking::domain::attention_tracker::{AttentionTracker, StatusEvent};
use crate::tracking::domain::thresholds::Thresholds;

pub type SessionId = u64;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),
    #[error(transparent)]
    InvalidDetection(#[from] InvalidDetectionInput),
}

/// Per-session tracker ownership.
///
/// Every connected camera stream gets its own `AttentionTracker`,
/// created on connect and dropped on disconnect, so one viewer going
/// idle can never trip alerts for another. Callers route each frame to
/// its session explicitly; there is no implicit shared state.
pub struct SessionRegistry {
    thresholds: Thresholds,
    sessions: HashMap<SessionId, AttentionTracker>,
}

impl SessionRegistry {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            sessions: HashMap::new(),
        }
    }

    /// Registers a session with a fresh tracker. Reconnecting an id
    /// replaces its tracker, resetting all timers.
    pub fn connect(&mut self, id: SessionId) {
        log::info!("session {id} connected");
        self.sessions
            .insert(id, AttentionTracker::new(self.thresholds));
    }

    /// Drops the session's tracker. Returns false for unknown ids.
    pub fn disconnect(&mut self, id: SessionId) -> bool {
        let existed = self.sessions.remove(&id).is_some();
        if existed {
            log::info!("session {id} disconnected");
        }
        existed
    }

    /// Routes one tick to the session's own tracker.
    pub fn update(
        &mut self,
        id: SessionId,
        detection: &DetectionResult,
        now: Duration,
    ) -> Result<StatusEvent, SessionError> {
        let tracker = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::UnknownSession(id))?;
        Ok(tracker.update(detection, now)?)
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detection_result::FaceDetection;
    use crate::shared::region::Rect;
    use crate::tracking::domain::attention_tracker::FocusState;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn open_eyes() -> DetectionResult {
        DetectionResult {
            faces: vec![FaceDetection {
                region: Rect::new(10, 10, 100, 100),
                eyes: vec![Rect::new(30, 40, 20, 20)],
            }],
        }
    }

    fn registry() -> SessionRegistry {
        SessionRegistry::new(Thresholds::from_secs_f64(6.0, 2.0, 1.0).unwrap())
    }

    #[test]
    fn test_unknown_session_is_an_error() {
        let mut reg = registry();
        let err = reg
            .update(7, &DetectionResult::empty(), secs(0.0))
            .unwrap_err();
        assert_eq!(err, SessionError::UnknownSession(7));
    }

    #[test]
    fn test_sessions_have_independent_timelines() {
        let mut reg = registry();
        reg.connect(1);
        reg.connect(2);

        // Session 1 stays present; session 2's chair is empty.
        reg.update(1, &open_eyes(), secs(0.0)).unwrap();
        reg.update(2, &DetectionResult::empty(), secs(0.0)).unwrap();

        let s1 = reg.update(1, &open_eyes(), secs(7.0)).unwrap();
        let s2 = reg.update(2, &DetectionResult::empty(), secs(7.0)).unwrap();
        assert_eq!(s1.state, FocusState::Focused);
        assert_eq!(s2.state, FocusState::NoFaceAlert);
    }

    #[test]
    fn test_disconnect_drops_state() {
        let mut reg = registry();
        reg.connect(1);
        assert!(reg.contains(1));
        assert!(reg.disconnect(1));
        assert!(!reg.contains(1));
        assert!(!reg.disconnect(1));
        assert!(reg
            .update(1, &open_eyes(), secs(0.0))
            .is_err());
    }

    #[test]
    fn test_reconnect_resets_timers() {
        let mut reg = registry();
        reg.connect(1);
        reg.update(1, &DetectionResult::empty(), secs(0.0)).unwrap();
        assert_eq!(
            reg.update(1, &DetectionResult::empty(), secs(10.0))
                .unwrap()
                .state,
            FocusState::NoFaceAlert
        );

        // A fresh connection starts a fresh grace period.
        reg.connect(1);
        assert_eq!(
            reg.update(1, &DetectionResult::empty(), secs(11.0))
                .unwrap()
                .state,
            FocusState::Focused
        );
    }

    #[test]
    fn test_invalid_input_surfaces_through_registry() {
        let mut reg = registry();
        reg.connect(1);
        let garbled = DetectionResult {
            faces: vec![FaceDetection {
                region: Rect::new(0, 0, -1, 10),
                eyes: vec![],
            }],
        };
        let err = reg.update(1, &garbled, secs(0.0)).unwrap_err();
        assert!(matches!(err, SessionError::InvalidDetection(_)));
    }

    #[test]
    fn test_len_tracks_connections() {
        let mut reg = registry();
        assert!(reg.is_empty());
        reg.connect(1);
        reg.connect(2);
        assert_eq!(reg.len(), 2);
        reg.disconnect(1);
        assert_eq!(reg.len(), 1);
    }
}
