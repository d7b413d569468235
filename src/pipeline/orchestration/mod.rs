pub mod gesture_pipeline;
pub mod metrics;
pub mod session;

pub use gesture_pipeline::{DisplayState, FrameReport, GesturePipeline, HandReport};
pub use metrics::{PerformanceMonitor, PerformanceStats};
pub use session::GestureSession;
