use serde::Serialize;

pub type StrokePoint = (i32, i32);

/// Fingertip trail drawn while the peace gesture is held.
///
/// By default the trail is one polyline, so resuming after a pause draws a straight
/// segment from the last old point to the first new one. Boundaries are only recorded
/// when the owner calls [`StrokeBuffer::end_stroke`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct StrokeBuffer {
    points: Vec<StrokePoint>,
    // Indices into `points` where a new stroke begins.
    breaks: Vec<usize>,
}

impl StrokeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: StrokePoint) {
        self.points.push(point);
    }

    /// Marks the end of the current stroke. A no-op when nothing has been drawn since
    /// the last boundary.
    pub fn end_stroke(&mut self) {
        let at = self.points.len();
        if at == 0 || self.breaks.last() == Some(&at) {
            return;
        }
        self.breaks.push(at);
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.breaks.clear();
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        if self.points.is_empty() {
            0
        } else {
            self.breaks.iter().filter(|&&at| at < self.points.len()).count() + 1
        }
    }

    /// Line segments to render, never bridging a recorded boundary.
    pub fn segments(&self) -> impl Iterator<Item = (StrokePoint, StrokePoint)> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .filter(|(i, _)| !self.breaks.contains(&(i + 1)))
            .map(|(_, pair)| (pair[0], pair[1]))
    }
}
