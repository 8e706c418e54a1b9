use thiserror::Error;

use crate::detection::domain::frame_decoder::FrameDecoder;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("empty frame payload")]
    EmptyPayload,
    #[error("failed to decode frame: {0}")]
    Codec(#[source] image::ImageError),
}

/// Decodes JPEG/PNG payloads to RGB8 frames via the `image` crate.
///
/// Format is sniffed from the payload bytes, so the transport does not
/// need to declare a content type.
pub struct ImageFrameDecoder;

impl ImageFrameDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder for ImageFrameDecoder {
    fn decode(&self, payload: &[u8]) -> Result<Frame, Box<dyn std::error::Error>> {
        if payload.is_empty() {
            return Err(Box::new(DecodeError::EmptyPayload));
        }
        let decoded = image::load_from_memory(payload).map_err(DecodeError::Codec)?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Frame::new(rgb.into_raw(), width, height, 3))
    }
}
