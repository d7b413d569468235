pub mod context;
pub mod orchestration;
pub mod services;
pub mod types;

pub use orchestration::{DisplayState, FrameReport, GesturePipeline, GestureSession, HandReport};
pub use services::{LandmarkSmoother, SmoothingState, StrokeBuffer};
pub use types::{FingerState, GestureActions, GestureLabel, PointerMove, VolumeIntent};
