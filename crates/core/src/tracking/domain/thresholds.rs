use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_FACE_ABSENCE: Duration = Duration::from_secs(6);
pub const DEFAULT_EYES_CLOSED: Duration = Duration::from_secs(2);
pub const DEFAULT_ALERT_COOLDOWN: Duration = Duration::from_secs(1);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThresholdError {
    #[error("{name} must be a positive duration, got {value}s")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} is not a finite number")]
    NotFinite { name: &'static str },
    #[error("{name} is too large for a duration, got {value}s")]
    OutOfRange { name: &'static str, value: f64 },
}

/// Elapsed-time thresholds for the attention tracker, validated once at
/// construction and immutable afterwards.
///
/// No ordering is enforced between `face_absence` and `eyes_closed`;
/// they guard independent conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    face_absence: Duration,
    eyes_closed: Duration,
    alert_cooldown: Duration,
}

impl Thresholds {
    pub fn new(
        face_absence: Duration,
        eyes_closed: Duration,
        alert_cooldown: Duration,
    ) -> Result<Self, ThresholdError> {
        Self::check_positive("face_absence", face_absence)?;
        Self::check_positive("eyes_closed", eyes_closed)?;
        Self::check_positive("alert_cooldown", alert_cooldown)?;
        Ok(Self {
            face_absence,
            eyes_closed,
            alert_cooldown,
        })
    }

    /// Convenience constructor for CLI/config input in seconds.
    pub fn from_secs_f64(
        face_absence: f64,
        eyes_closed: f64,
        alert_cooldown: f64,
    ) -> Result<Self, ThresholdError> {
        Self::new(
            Self::secs_to_duration("face_absence", face_absence)?,
            Self::secs_to_duration("eyes_closed", eyes_closed)?,
            Self::secs_to_duration("alert_cooldown", alert_cooldown)?,
        )
    }

    pub fn face_absence(&self) -> Duration {
        self.face_absence
    }

    pub fn eyes_closed(&self) -> Duration {
        self.eyes_closed
    }

    pub fn alert_cooldown(&self) -> Duration {
        self.alert_cooldown
    }

    fn check_positive(name: &'static str, value: Duration) -> Result<(), ThresholdError> {
        if value.is_zero() {
            return Err(ThresholdError::NonPositive {
                name,
                value: value.as_secs_f64(),
            });
        }
        Ok(())
    }

    fn secs_to_duration(name: &'static str, secs: f64) -> Result<Duration, ThresholdError> {
        if !secs.is_finite() {
            return Err(ThresholdError::NotFinite { name });
        }
        if secs <= 0.0 {
            return Err(ThresholdError::NonPositive { name, value: secs });
        }
        Duration::try_from_secs_f64(secs)
            .map_err(|_| ThresholdError::OutOfRange { name, value: secs })
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            face_absence: DEFAULT_FACE_ABSENCE,
            eyes_closed: DEFAULT_EYES_CLOSED,
            alert_cooldown: DEFAULT_ALERT_COOLDOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.face_absence(), Duration::from_secs(6));
        assert_eq!(t.eyes_closed(), Duration::from_secs(2));
        assert_eq!(t.alert_cooldown(), Duration::from_secs(1));
    }

    #[test]
    fn test_valid_construction() {
        let t = Thresholds::new(
            Duration::from_secs(3),
            Duration::from_secs(5),
            Duration::from_millis(500),
        )
        .unwrap();
        // eyes_closed larger than face_absence is allowed
        assert_eq!(t.eyes_closed(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = Thresholds::new(
            Duration::ZERO,
            Duration::from_secs(2),
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ThresholdError::NonPositive {
                name: "face_absence",
                value: 0.0
            }
        );
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-1.5)]
    fn test_from_secs_rejects_non_positive(#[case] secs: f64) {
        assert!(Thresholds::from_secs_f64(6.0, secs, 1.0).is_err());
    }

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_from_secs_rejects_non_finite(#[case] secs: f64) {
        let err = Thresholds::from_secs_f64(secs, 2.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            ThresholdError::NotFinite {
                name: "face_absence"
            }
        );
    }

    #[test]
    fn test_from_secs_rejects_overflowing_magnitude() {
        // Finite but beyond what a Duration can hold: an error, not a panic.
        let err = Thresholds::from_secs_f64(1e20, 2.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            ThresholdError::OutOfRange {
                name: "face_absence",
                value: 1e20
            }
        );
    }

    #[test]
    fn test_from_secs_fractional() {
        let t = Thresholds::from_secs_f64(6.5, 2.25, 0.75).unwrap();
        assert_eq!(t.face_absence(), Duration::from_millis(6500));
        assert_eq!(t.eyes_closed(), Duration::from_millis(2250));
        assert_eq!(t.alert_cooldown(), Duration::from_millis(750));
    }
}
