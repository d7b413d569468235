use serde::{Deserialize, Serialize};

/// Request to place the pointer at a screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerMove {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeIntent {
    Up,
    Down,
}

impl VolumeIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeIntent::Up => "up",
            VolumeIntent::Down => "down",
        }
    }
}

/// Everything the action state machine asked for while handling one hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureActions {
    pub pointer: Option<PointerMove>,
    pub volume: Option<VolumeIntent>,
    /// The fingertip appended to the stroke buffer, if any.
    pub stroke_point: Option<(i32, i32)>,
    pub drawing: bool,
}
