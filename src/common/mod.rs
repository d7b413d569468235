pub mod frame;
pub mod hand;
pub mod landmark;

pub use frame::Frame;
pub use hand::{HandObservation, Handedness, RawHand};
pub use landmark::{LANDMARK_COUNT, LandmarkPoint, Landmarks};
