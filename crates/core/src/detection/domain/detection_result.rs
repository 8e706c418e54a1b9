use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::region::Rect;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid detection input: {reason}")]
pub struct InvalidDetectionInput {
    pub reason: String,
}

/// One face hit with the eye regions found inside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceDetection {
    pub region: Rect,
    pub eyes: Vec<Rect>,
}

impl FaceDetection {
    pub fn has_open_eyes(&self) -> bool {
        !self.eyes.is_empty()
    }
}

/// Everything the detector found in one frame, in detector order.
///
/// Built fresh per tick and consumed transiently by the tracker; never
/// persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub faces: Vec<FaceDetection>,
}

impl DetectionResult {
    /// A frame with no faces at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_faces(&self) -> bool {
        !self.faces.is_empty()
    }

    /// Rejects garbled detector output (negative region extents) before
    /// it can reach the tracker.
    pub fn validate(&self) -> Result<(), InvalidDetectionInput> {
        for (i, face) in self.faces.iter().enumerate() {
            if !face.region.is_well_formed() {
                return Err(InvalidDetectionInput {
                    reason: format!(
                        "face {i} has negative extent {}x{}",
                        face.region.width, face.region.height
                    ),
                });
            }
            for eye in &face.eyes {
                if !eye.is_well_formed() {
                    return Err(InvalidDetectionInput {
                        reason: format!(
                            "eye region in face {i} has negative extent {}x{}",
                            eye.width, eye.height
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(eye_count: usize) -> FaceDetection {
        FaceDetection {
            region: Rect::new(10, 10, 100, 100),
            eyes: vec![Rect::new(20, 30, 24, 24); eye_count],
        }
    }

    #[test]
    fn test_empty_has_no_faces() {
        assert!(!DetectionResult::empty().has_faces());
    }

    #[test]
    fn test_open_eyes_requires_at_least_one_region() {
        assert!(!face(0).has_open_eyes());
        assert!(face(1).has_open_eyes());
        assert!(face(2).has_open_eyes());
    }

    #[test]
    fn test_validate_accepts_well_formed_input() {
        let result = DetectionResult {
            faces: vec![face(2), face(0)],
        };
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_face_extent() {
        let result = DetectionResult {
            faces: vec![FaceDetection {
                region: Rect::new(0, 0, -10, 40),
                eyes: vec![],
            }],
        };
        let err = result.validate().unwrap_err();
        assert!(err.reason.contains("face 0"));
    }

    #[test]
    fn test_validate_rejects_negative_eye_extent() {
        let result = DetectionResult {
            faces: vec![
                face(1),
                FaceDetection {
                    region: Rect::new(0, 0, 50, 50),
                    eyes: vec![Rect::new(5, 5, 10, -3)],
                },
            ],
        };
        let err = result.validate().unwrap_err();
        assert!(err.reason.contains("face 1"));
    }
}
