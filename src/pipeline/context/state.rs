use crate::common::Landmarks;
use crate::pipeline::types::{FingerState, GestureLabel};

// Markers to track how far a hand has travelled through the pipeline
pub struct IngestedState;

pub struct SmoothedState {
    pub(super) landmarks: Landmarks,
}

pub struct ClassifiedState {
    pub(super) landmarks: Landmarks,
    pub(super) fingers: FingerState,
    pub(super) gesture: GestureLabel,
}

pub trait ProcessingState: 'static {
    fn state_name() -> &'static str;
}

impl ProcessingState for IngestedState {
    fn state_name() -> &'static str {
        "Ingested"
    }
}

impl ProcessingState for SmoothedState {
    fn state_name() -> &'static str {
        "Smoothed"
    }
}

impl ProcessingState for ClassifiedState {
    fn state_name() -> &'static str {
        "Classified"
    }
}
