use crate::common::landmark::{INDEX_TIP, Landmarks, pinch_distance};
use crate::config::{PointerSettings, VolumeSettings};
use crate::pipeline::services::stroke_buffer::StrokeBuffer;
use crate::pipeline::types::{GestureActions, GestureLabel, PointerMove, VolumeIntent};
use tracing::debug;

/// Linear range mapping with the result clamped to the output range.
pub fn remap_clamped(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if value <= in_min {
        return out_min;
    }
    if value >= in_max {
        return out_max;
    }
    let mapped = out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min);
    mapped.clamp(out_min.min(out_max), out_min.max(out_max))
}

/// Maps a fingertip inside the inset frame band onto the whole screen.
#[derive(Debug, Clone)]
pub struct PointerMapper {
    inset: f32,
    screen_width: f32,
    screen_height: f32,
}

impl PointerMapper {
    pub fn new(settings: &PointerSettings) -> Self {
        Self {
            inset: settings.frame_inset,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
        }
    }

    pub fn map(&self, x: f32, y: f32, frame_width: u32, frame_height: u32) -> PointerMove {
        let right = frame_width as f32 - self.inset;
        let bottom = frame_height as f32 - self.inset;
        PointerMove {
            x: remap_clamped(x, self.inset, right, 0.0, self.screen_width),
            y: remap_clamped(y, self.inset, bottom, 0.0, self.screen_height),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VolumeThresholds {
    down_below: f32,
    up_above: f32,
}

impl VolumeThresholds {
    pub fn new(settings: &VolumeSettings) -> Self {
        Self {
            down_below: settings.down_below,
            up_above: settings.up_above,
        }
    }

    /// Nothing is emitted inside the closed band between the two thresholds.
    pub fn intent(&self, distance: f32) -> Option<VolumeIntent> {
        if distance < self.down_below {
            Some(VolumeIntent::Down)
        } else if distance > self.up_above {
            Some(VolumeIntent::Up)
        } else {
            None
        }
    }
}

/// Drives pointer, drawing and volume behavior from one hand's gesture.
///
/// Only the stroke buffer accumulates; everything else is recomputed from the current
/// gesture. The drawing flag has no memory beyond "was the last handled gesture Peace".
/// Stroke boundaries are a per-frame decision and are left to the frame pipeline.
#[derive(Debug, Clone)]
pub struct GestureActionMachine {
    pointer: PointerMapper,
    volume: VolumeThresholds,
}

impl GestureActionMachine {
    pub fn new(pointer: &PointerSettings, volume: &VolumeSettings) -> Self {
        Self {
            pointer: PointerMapper::new(pointer),
            volume: VolumeThresholds::new(volume),
        }
    }

    /// `drawing` is the toggle carried from the previous handled hand; it is overwritten.
    pub fn handle(
        &self,
        gesture: GestureLabel,
        landmarks: &Landmarks,
        frame_size: (u32, u32),
        strokes: &mut StrokeBuffer,
        drawing: &mut bool,
    ) -> GestureActions {
        let index_tip = landmarks[INDEX_TIP];
        let mut actions = GestureActions::default();

        if gesture == GestureLabel::Pointing {
            let target = self.pointer.map(index_tip.x, index_tip.y, frame_size.0, frame_size.1);
            debug!("Pointer move requested to ({:.1}, {:.1})", target.x, target.y);
            actions.pointer = Some(target);
        }

        *drawing = gesture == GestureLabel::Peace;
        if *drawing {
            let point = (index_tip.x as i32, index_tip.y as i32);
            strokes.push(point);
            actions.stroke_point = Some(point);
        }
        actions.drawing = *drawing;

        if gesture == GestureLabel::Pinch {
            let distance = pinch_distance(landmarks);
            actions.volume = self.volume.intent(distance);
            if let Some(intent) = actions.volume {
                debug!(
                    "Volume {} intent at pinch distance {:.1}",
                    intent.as_str(),
                    distance
                );
            }
        }

        actions
    }
}

impl Default for GestureActionMachine {
    fn default() -> Self {
        Self::new(&PointerSettings::default(), &VolumeSettings::default())
    }
}
