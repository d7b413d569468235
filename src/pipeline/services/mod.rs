pub mod action_machine;
pub mod finger_classifier;
pub mod gesture_classifier;
pub mod smoother;
pub mod stroke_buffer;

pub use action_machine::{GestureActionMachine, PointerMapper, VolumeThresholds, remap_clamped};
pub use finger_classifier::fingers_up;
pub use gesture_classifier::classify;
pub use smoother::{LandmarkSmoother, SmoothingState};
pub use stroke_buffer::{StrokeBuffer, StrokePoint};
