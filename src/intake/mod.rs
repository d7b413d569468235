pub mod replay;
pub mod source;

pub use replay::{RecordedFrame, ReplayDetector, ReplayFrameSource, ReplayRecording};
pub use source::{FrameSource, HandDetector};
