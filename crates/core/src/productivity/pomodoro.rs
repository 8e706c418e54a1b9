use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_WORK: Duration = Duration::from_secs(25 * 60);
pub const DEFAULT_BREAK: Duration = Duration::from_secs(5 * 60);

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{name} duration must be positive")]
pub struct InvalidPomodoroConfig {
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

/// Phase rollover notification, surfaced to whatever the host uses for
/// notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PomodoroEvent {
    WorkComplete,
    BreakComplete,
}

impl PomodoroEvent {
    pub fn message(&self) -> &'static str {
        match self {
            PomodoroEvent::WorkComplete => "time's up, take a break",
            PomodoroEvent::BreakComplete => "break over, back to work",
        }
    }
}

/// Tick-driven work/break cycle on the same monotonic timeline as the
/// attention tracker.
///
/// The host polls `tick` at whatever cadence it likes; a phase rolls
/// over on the first tick at or past its configured duration. Nothing
/// here sleeps or schedules.
pub struct Pomodoro {
    work: Duration,
    rest: Duration,
    phase: Phase,
    phase_started_at: Option<Duration>,
    completed_sessions: u32,
}

impl Pomodoro {
    pub fn new(work: Duration, rest: Duration) -> Result<Self, InvalidPomodoroConfig> {
        if work.is_zero() {
            return Err(InvalidPomodoroConfig { name: "work" });
        }
        if rest.is_zero() {
            return Err(InvalidPomodoroConfig { name: "break" });
        }
        Ok(Self {
            work,
            rest,
            phase: Phase::Work,
            phase_started_at: None,
            completed_sessions: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Finished work phases so far.
    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Advances the cycle. The first tick anchors the current phase;
    /// timestamps running backwards are clamped to the phase start.
    pub fn tick(&mut self, now: Duration) -> Option<PomodoroEvent> {
        let started = *self.phase_started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started);

        match self.phase {
            Phase::Work if elapsed >= self.work => {
                self.completed_sessions += 1;
                self.phase = Phase::Break;
                self.phase_started_at = Some(now);
                Some(PomodoroEvent::WorkComplete)
            }
            Phase::Break if elapsed >= self.rest => {
                self.phase = Phase::Work;
                self.phase_started_at = Some(now);
                Some(PomodoroEvent::BreakComplete)
            }
            _ => None,
        }
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK,
            rest: DEFAULT_BREAK,
            phase: Phase::Work,
            phase_started_at: None,
            completed_sessions: 0,
        }
    }
}
