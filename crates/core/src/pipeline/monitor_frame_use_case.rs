use std::time::Duration;

use crate::alert::domain::alert_sink::AlertSink;
use crate::detection::domain::detection_result::{
    DetectionResult, FaceDetection, InvalidDetectionInput,
};
use crate::detection::domain::frame_decoder::FrameDecoder;
use crate::detection::domain::region_detector::RegionDetector;
use crate::shared::clock::Clock;
use crate::tracking::domain::attention_tracker::{AttentionTracker, StatusEvent};

/// What one frame tick produced.
///
/// `Unavailable` is deliberately distinct from a `Focused` event: a tick
/// where decode or detection failed carries no information about the
/// subject, and reporting it as focused would silently swallow failures.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Classified(StatusEvent),
    Unavailable { reason: String },
}

/// Per-frame monitoring pipeline: decode → detect faces → detect eyes
/// per face → classify → deliver.
///
/// On decoder or detector failure the tracker is left untouched; a
/// failed tick must neither reset the absence timer nor extend the
/// eyes-closed window.
pub struct MonitorFrameUseCase {
    decoder: Box<dyn FrameDecoder>,
    detector: Box<dyn RegionDetector>,
    tracker: AttentionTracker,
    sink: Box<dyn AlertSink>,
    clock: Box<dyn Clock>,
}

impl MonitorFrameUseCase {
    pub fn new(
        decoder: Box<dyn FrameDecoder>,
        detector: Box<dyn RegionDetector>,
        tracker: AttentionTracker,
        sink: Box<dyn AlertSink>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            decoder,
            detector,
            tracker,
            sink,
            clock,
        }
    }

    /// Processes one encoded frame, stamping it with the injected clock.
    pub fn tick(&mut self, payload: &[u8]) -> Result<TickOutcome, InvalidDetectionInput> {
        let now = self.clock.now();
        self.tick_at(payload, now)
    }

    /// Processes one encoded frame at an explicit timestamp.
    pub fn tick_at(
        &mut self,
        payload: &[u8],
        now: Duration,
    ) -> Result<TickOutcome, InvalidDetectionInput> {
        let frame = match self.decoder.decode(payload) {
            Ok(frame) => frame,
            Err(e) => return Ok(self.unavailable("decode", e)),
        };

        let face_regions = match self.detector.detect_faces(&frame) {
            Ok(regions) => regions,
            Err(e) => return Ok(self.unavailable("face detection", e)),
        };

        let mut faces = Vec::with_capacity(face_regions.len());
        for region in face_regions {
            let eyes = match self.detector.detect_eyes(&frame, &region) {
                Ok(eyes) => eyes,
                Err(e) => return Ok(self.unavailable("eye detection", e)),
            };
            faces.push(FaceDetection { region, eyes });
        }

        let event = self.tracker.update(&DetectionResult { faces }, now)?;
        self.sink.deliver(&event);
        Ok(TickOutcome::Classified(event))
    }

    pub fn tracker(&self) -> &AttentionTracker {
        &self.tracker
    }

    fn unavailable(&self, stage: &str, error: Box<dyn std::error::Error>) -> TickOutcome {
        log::warn!("no classification this tick, {stage} failed: {error}");
        TickOutcome::Unavailable {
            reason: format!("{stage} failed: {error}"),
        }
    }
}
