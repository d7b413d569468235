use crate::common::{Frame, RawHand};
use crate::error::AppError;
use crate::intake::source::{FrameSource, HandDetector};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use tracing::{debug, info};

/// One line of a recording: the frame size and what the detector saw in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedFrame {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub hands: Vec<RawHand>,
}

/// A JSON-lines capture of detector output that can be played back without a camera.
#[derive(Debug, Clone, Default)]
pub struct ReplayRecording {
    frames: Vec<RecordedFrame>,
}

impl ReplayRecording {
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let frames = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str::<RecordedFrame>(line)
                    .map_err(|source| AppError::Recording { line: i + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { frames })
    }

    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let text = tokio::fs::read_to_string(path).await?;
        let recording = Self::parse(&text)?;
        info!("Loaded {} recorded frames from {}", recording.len(), path.display());
        Ok(recording)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Splits into a source that replays frame sizes and a detector that replays hands,
    /// in lockstep. Frames without a size use the fallback.
    pub fn split(self, fallback_size: (u32, u32)) -> (ReplayFrameSource, ReplayDetector) {
        let mut sizes = VecDeque::with_capacity(self.frames.len());
        let mut hands = VecDeque::with_capacity(self.frames.len());
        for frame in self.frames {
            sizes.push_back((
                frame.width.unwrap_or(fallback_size.0),
                frame.height.unwrap_or(fallback_size.1),
            ));
            hands.push_back(frame.hands);
        }
        (ReplayFrameSource { sizes }, ReplayDetector { hands })
    }
}

pub struct ReplayFrameSource {
    sizes: VecDeque<(u32, u32)>,
}

#[async_trait]
impl FrameSource for ReplayFrameSource {
    async fn next_frame(&mut self) -> Result<Option<Frame>, AppError> {
        let Some((width, height)) = self.sizes.pop_front() else {
            return Ok(None);
        };
        if width == 0 || height == 0 {
            return Err(AppError::FrameSource(format!(
                "recorded frame has an empty size {}x{}",
                width, height
            )));
        }
        Ok(Some(Frame::sized(width, height)))
    }

    fn name(&self) -> &'static str {
        "ReplayFrameSource"
    }
}

pub struct ReplayDetector {
    hands: VecDeque<Vec<RawHand>>,
}

#[async_trait]
impl HandDetector for ReplayDetector {
    async fn detect(&mut self, frame: &Frame) -> Result<Vec<RawHand>, AppError> {
        let hands = self.hands.pop_front().ok_or_else(|| {
            AppError::Detector("recording has no detections left".to_string())
        })?;
        debug!("Replaying {} hands for frame {}", hands.len(), frame.frame_id());
        Ok(hands)
    }

    fn name(&self) -> &'static str {
        "ReplayDetector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(label: &str, count: usize) -> String {
        let landmarks = vec![[0.5_f32, 0.5, 0.0]; count];
        serde_json::json!({ "hands": [{ "label": label, "landmarks": landmarks }] }).to_string()
    }

    #[tokio::test]
    async fn replays_frames_and_hands_in_lockstep() {
        let text = format!(
            "{}\n\n{{\"width\":320,\"height\":240,\"hands\":[]}}\n",
            line("Right", 21)
        );
        let recording = ReplayRecording::parse(&text).unwrap();
        assert_eq!(recording.len(), 2);

        let (mut source, mut detector) = recording.split((640, 480));

        let first = source.next_frame().await.unwrap().unwrap();
        assert_eq!((first.width(), first.height()), (640, 480));
        let hands = detector.detect(&first).await.unwrap();
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].label, "Right");

        let second = source.next_frame().await.unwrap().unwrap();
        assert_eq!((second.width(), second.height()), (320, 240));
        assert!(detector.detect(&second).await.unwrap().is_empty());

        assert!(source.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn oversized_frame_replays_without_pixel_buffer() {
        let text = "{\"width\":4294967295,\"height\":4294967295,\"hands\":[]}";
        let recording = ReplayRecording::parse(text).unwrap();
        let (mut source, mut detector) = recording.split((640, 480));

        let frame = source.next_frame().await.unwrap().unwrap();
        assert_eq!((frame.width(), frame.height()), (u32::MAX, u32::MAX));
        assert!(frame.image().is_none());
        assert!(detector.detect(&frame).await.unwrap().is_empty());
        assert!(source.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_frame_size_is_a_source_error() {
        let text = "{\"width\":0,\"height\":480,\"hands\":[]}";
        let recording = ReplayRecording::parse(text).unwrap();
        let (mut source, _) = recording.split((640, 480));

        let result = source.next_frame().await;
        assert!(matches!(result, Err(AppError::FrameSource(_))));
    }

    #[test]
    fn bad_line_reports_its_number() {
        let text = format!("{}\nnot json\n", line("Left", 21));
        let err = ReplayRecording::parse(&text).unwrap_err();
        assert!(matches!(err, AppError::Recording { line: 2, .. }));
    }
}
