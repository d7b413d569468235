pub mod actuator;
pub mod renderer;

use crate::error::AppError;
use crate::pipeline::{PointerMove, StrokeBuffer, VolumeIntent};

pub use actuator::LoggingActuator;
pub use renderer::{HudRenderer, HudState};

/// Sink for pointer and volume requests. Implementations decide what actually moves.
pub trait Actuator: Send {
    fn move_pointer(&mut self, target: PointerMove) -> Result<(), AppError>;
    fn volume(&mut self, intent: VolumeIntent) -> Result<(), AppError>;
}

/// Overlay consumer; never feeds anything back into the pipeline.
pub trait Renderer: Send {
    fn render(&mut self, hud: &HudState, strokes: &StrokeBuffer);
}
