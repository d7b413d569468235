use crate::common::{Frame, RawHand};
use crate::error::AppError;
use async_trait::async_trait;

/// Camera or any other producer of frames.
#[async_trait]
pub trait FrameSource: Send {
    /// `Ok(None)` marks the end of the stream.
    async fn next_frame(&mut self) -> Result<Option<Frame>, AppError>;
    fn name(&self) -> &'static str;
}

/// Hand-landmark model. Zero hands is a valid answer.
#[async_trait]
pub trait HandDetector: Send {
    async fn detect(&mut self, frame: &Frame) -> Result<Vec<RawHand>, AppError>;
    fn name(&self) -> &'static str;
}
