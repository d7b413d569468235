pub mod common;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod intake;
pub mod output;
pub mod pipeline;

pub use common::{Frame, HandObservation, Handedness, LandmarkPoint, Landmarks, RawHand};
pub use config::Settings;
pub use coordinator::{Command, CommandHandle, Coordinator, CoordinatorBuilder, RunSummary};
pub use error::AppError;
pub use pipeline::{
    FingerState, FrameReport, GestureLabel, GesturePipeline, GestureSession, StrokeBuffer,
};
