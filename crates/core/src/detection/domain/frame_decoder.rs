use crate::shared::frame::Frame;

/// Domain interface for turning an encoded image payload into pixels.
///
/// The transport hands over whatever bytes arrived on the wire (JPEG,
/// PNG); implementations own the codec choice.
pub trait FrameDecoder: Send {
    fn decode(&self, payload: &[u8]) -> Result<Frame, Box<dyn std::error::Error>>;
}
