use crate::output::Renderer;
use crate::pipeline::{DisplayState, StrokeBuffer, VolumeIntent};
use std::fmt;
use tracing::debug;

/// Everything the header bar shows for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HudState {
    pub fps: f32,
    pub display: DisplayState,
    pub drawing: bool,
    pub volume: Option<VolumeIntent>,
}

impl fmt::Display for HudState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FPS: {} | {}", self.fps as u32, self.display)?;
        match self.volume {
            Some(VolumeIntent::Up) => write!(f, " | Volume UP"),
            Some(VolumeIntent::Down) => write!(f, " | Volume DOWN"),
            None => Ok(()),
        }
    }
}

/// Headless renderer that logs the header line and remembers what it last drew.
#[derive(Debug, Default)]
pub struct HudRenderer {
    last: Option<HudState>,
    last_stroke_segments: usize,
    frames_rendered: usize,
}

impl HudRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&HudState> {
        self.last.as_ref()
    }

    pub fn last_stroke_segments(&self) -> usize {
        self.last_stroke_segments
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }
}

impl Renderer for HudRenderer {
    fn render(&mut self, hud: &HudState, strokes: &StrokeBuffer) {
        self.last_stroke_segments = strokes.segments().count();
        self.frames_rendered += 1;
        debug!("{} | stroke: {} points", hud, strokes.len());
        self.last = Some(*hud);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Handedness;
    use crate::pipeline::GestureLabel;

    #[test]
    fn header_line_matches_overlay_layout() {
        let hud = HudState {
            fps: 29.7,
            display: DisplayState {
                gesture: Some(GestureLabel::Pinch),
                handedness: Some(Handedness::Left),
            },
            drawing: false,
            volume: Some(VolumeIntent::Down),
        };
        assert_eq!(
            hud.to_string(),
            "FPS: 29 | Gesture: Pinch | Hand: Left | Volume DOWN"
        );
        assert_eq!(HudState::default().to_string(), "FPS: 0 | Gesture: None | Hand: None");
    }

    #[test]
    fn renderer_counts_stroke_segments() {
        let mut renderer = HudRenderer::new();
        let mut strokes = StrokeBuffer::new();
        strokes.push((0, 0));
        strokes.push((5, 5));
        strokes.push((9, 9));

        renderer.render(&HudState::default(), &strokes);

        assert_eq!(renderer.last_stroke_segments(), 2);
        assert_eq!(renderer.frames_rendered(), 1);
        assert!(renderer.last().is_some());
    }
}
