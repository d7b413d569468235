mod action;
mod finger_state;
mod gesture;

pub use action::{GestureActions, PointerMove, VolumeIntent};
pub use finger_state::FingerState;
pub use gesture::GestureLabel;
