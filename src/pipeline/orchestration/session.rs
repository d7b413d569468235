use crate::pipeline::services::smoother::SmoothingState;
use crate::pipeline::services::stroke_buffer::StrokeBuffer;
use tracing::info;

/// Mutable state that outlives a single frame. Owned by the driving loop and lent to
/// the pipeline for each frame; nothing here is shared between threads.
#[derive(Debug, Clone, Default)]
pub struct GestureSession {
    pub(crate) smoothing: SmoothingState,
    pub(crate) strokes: StrokeBuffer,
    pub(crate) drawing: bool,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn smoothing(&self) -> &SmoothingState {
        &self.smoothing
    }

    pub fn smoothing_mut(&mut self) -> &mut SmoothingState {
        &mut self.smoothing
    }

    pub fn strokes(&self) -> &StrokeBuffer {
        &self.strokes
    }

    /// True while the most recently handled hand held the peace gesture.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn clear_drawing(&mut self) {
        info!("Clearing drawing ({} points)", self.strokes.len());
        self.strokes.clear();
    }
}
