use crate::shared::frame::Frame;
use crate::shared::region::Rect;

/// Domain interface for face/eye region detection.
///
/// Implementations may be stateful (e.g., caching across frames), hence
/// `&mut self`. Eye detection is scoped to one face region, mirroring
/// the cascade-on-ROI pattern of the usual detectors.
pub trait RegionDetector: Send {
    fn detect_faces(&mut self, frame: &Frame) -> Result<Vec<Rect>, Box<dyn std::error::Error>>;

    fn detect_eyes(
        &mut self,
        frame: &Frame,
        face: &Rect,
    ) -> Result<Vec<Rect>, Box<dyn std::error::Error>>;
}
