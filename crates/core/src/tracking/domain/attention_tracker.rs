use std::time::Duration;

use serde::Serialize;

use crate::detection::domain::detection_result::{DetectionResult, InvalidDetectionInput};
use crate::tracking::domain::thresholds::Thresholds;

pub const MSG_FOCUS_OK: &str = "focus ok";
pub const MSG_DISTRACTED: &str = "distracted";
pub const MSG_WAKE_UP: &str = "wake up";

/// Attention classification for one frame tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusState {
    Focused,
    NoFaceAlert,
    EyesClosedAlert,
}

/// One tick's classification plus the debounced alert decision.
///
/// `alert_fired` distinguishes "newly distracted" from "still distracted":
/// a suppressed repeat keeps the alert state for display but must not
/// re-trigger an audible cue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    pub state: FocusState,
    pub message: &'static str,
    pub alert_fired: bool,
}

impl StatusEvent {
    fn focused() -> Self {
        Self {
            state: FocusState::Focused,
            message: MSG_FOCUS_OK,
            alert_fired: false,
        }
    }

    pub fn is_alert(&self) -> bool {
        self.state != FocusState::Focused
    }
}

/// Time-windowed attention state machine.
///
/// Classification is re-evaluated fully on every tick as a function of
/// three timers, never of the previously returned state. One tracker
/// serves exactly one camera stream; hosts with several streams create
/// one tracker per stream (see `SessionRegistry`).
///
/// Timestamps must come from a monotonic timeline with non-decreasing
/// values. A regressing timestamp is clamped (elapsed delta treated as
/// zero), logged and counted, never fatal.
pub struct AttentionTracker {
    thresholds: Thresholds,
    last_face_seen_at: Duration,
    last_eyes_open_at: Duration,
    last_alert_at: Option<Duration>,
    last_now: Option<Duration>,
    clock_regressions: u64,
}

impl AttentionTracker {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            last_face_seen_at: Duration::ZERO,
            last_eyes_open_at: Duration::ZERO,
            last_alert_at: None,
            last_now: None,
            clock_regressions: 0,
        }
    }

    /// How many times a caller handed in a timestamp earlier than the
    /// previous one.
    pub fn clock_regressions(&self) -> u64 {
        self.clock_regressions
    }

    /// Classifies one frame tick.
    ///
    /// Malformed detector output is rejected before any state mutation.
    /// Grace periods start at the first update: the tracker primes its
    /// timers to the first observed timestamp, so a stream that opens on
    /// an empty room still gets the full absence grace period.
    pub fn update(
        &mut self,
        detection: &DetectionResult,
        now: Duration,
    ) -> Result<StatusEvent, InvalidDetectionInput> {
        detection.validate()?;
        let now = self.advance_clock(now);

        if !detection.has_faces() {
            if now.saturating_sub(self.last_face_seen_at) > self.thresholds.face_absence() {
                return Ok(self.alert(FocusState::NoFaceAlert, MSG_DISTRACTED, now));
            }
            return Ok(StatusEvent::focused());
        }

        self.last_face_seen_at = now;

        // First-match policy: one face with open eyes is enough for a
        // single-user monitor, so the scan short-circuits.
        let eyes_open = detection.faces.iter().any(|f| f.has_open_eyes());
        if eyes_open {
            self.last_eyes_open_at = now;
        } else if now.saturating_sub(self.last_eyes_open_at) > self.thresholds.eyes_closed() {
            return Ok(self.alert(FocusState::EyesClosedAlert, MSG_WAKE_UP, now));
        }

        Ok(StatusEvent::focused())
    }

    /// Primes the timers on the first tick and clamps clock regressions.
    fn advance_clock(&mut self, now: Duration) -> Duration {
        match self.last_now {
            None => {
                self.last_face_seen_at = now;
                self.last_eyes_open_at = now;
                self.last_now = Some(now);
                now
            }
            Some(prev) if now < prev => {
                self.clock_regressions += 1;
                log::warn!(
                    "clock regression: {:.3}s after {:.3}s, clamping elapsed delta to zero",
                    now.as_secs_f64(),
                    prev.as_secs_f64()
                );
                prev
            }
            Some(_) => {
                self.last_now = Some(now);
                now
            }
        }
    }

    /// Applies the unified cooldown policy to an alert-worthy tick.
    fn alert(&mut self, state: FocusState, message: &'static str, now: Duration) -> StatusEvent {
        let fired = match self.last_alert_at {
            None => true,
            // A repeated call at the same instant reports the same firing.
            Some(prev) => {
                now == prev || now.saturating_sub(prev) >= self.thresholds.alert_cooldown()
            }
        };
        if fired {
            self.last_alert_at = Some(now);
        }
        StatusEvent {
            state,
            message,
            alert_fired: fired,
        }
    }
}
