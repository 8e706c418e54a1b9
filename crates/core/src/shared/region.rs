use serde::{Deserialize, Serialize};

/// A rectangular detector hit (face or eye) in pixel coordinates.
///
/// The attention logic only ever counts rects; geometry is carried for
/// callers that want to render overlays, not for state decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A detector must never report a negative extent; zero is tolerated
    /// (some cascades emit degenerate hits on the frame border).
    pub fn is_well_formed(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }
}
