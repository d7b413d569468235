use crate::common::{HandObservation, Handedness, Landmarks};
use crate::pipeline::context::metrics::{HandMetrics, HandStage};
use crate::pipeline::context::state::{
    ClassifiedState, IngestedState, ProcessingState, SmoothedState,
};
use crate::pipeline::types::{FingerState, GestureLabel};
use std::time::Instant;

// HandContext with compile-time stage tracking; later stages are only reachable
// through the transitions below.
pub struct HandContext<S> {
    label: Handedness,
    raw: Landmarks,
    metrics: HandMetrics,
    stage_start: Instant,
    state: S,
}

impl<S: ProcessingState> HandContext<S> {
    pub fn label(&self) -> Handedness {
        self.label
    }

    /// Landmarks as the detector reported them, before smoothing.
    pub fn raw_landmarks(&self) -> &Landmarks {
        &self.raw
    }

    pub fn metrics(&self) -> &HandMetrics {
        &self.metrics
    }

    pub fn into_metrics(self) -> HandMetrics {
        self.metrics
    }

    pub fn stage_name(&self) -> &'static str {
        S::state_name()
    }

    fn finish_stage(&mut self, stage: HandStage) {
        let now = Instant::now();
        self.metrics.record(stage, now.duration_since(self.stage_start));
        self.stage_start = now;
    }
}

impl HandContext<IngestedState> {
    pub fn new(observation: HandObservation) -> Self {
        Self {
            label: observation.label,
            raw: observation.landmarks,
            metrics: HandMetrics::new(),
            stage_start: Instant::now(),
            state: IngestedState,
        }
    }

    pub fn into_smoothed(mut self, landmarks: Landmarks) -> HandContext<SmoothedState> {
        self.finish_stage(HandStage::Smoothing);
        HandContext {
            label: self.label,
            raw: self.raw,
            metrics: self.metrics,
            stage_start: self.stage_start,
            state: SmoothedState { landmarks },
        }
    }
}

impl HandContext<SmoothedState> {
    pub fn landmarks(&self) -> &Landmarks {
        &self.state.landmarks
    }

    pub fn record_finger_state(&mut self) {
        self.finish_stage(HandStage::FingerState);
    }

    pub fn into_classified(
        mut self,
        fingers: FingerState,
        gesture: GestureLabel,
    ) -> HandContext<ClassifiedState> {
        self.finish_stage(HandStage::Gesture);
        HandContext {
            label: self.label,
            raw: self.raw,
            metrics: self.metrics,
            stage_start: self.stage_start,
            state: ClassifiedState {
                landmarks: self.state.landmarks,
                fingers,
                gesture,
            },
        }
    }
}

impl HandContext<ClassifiedState> {
    pub fn landmarks(&self) -> &Landmarks {
        &self.state.landmarks
    }

    pub fn fingers(&self) -> FingerState {
        self.state.fingers
    }

    pub fn gesture(&self) -> GestureLabel {
        self.state.gesture
    }

    pub fn record_actions(&mut self) {
        self.finish_stage(HandStage::Actions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LandmarkPoint;

    #[test]
    fn transitions_carry_label_and_record_stages() {
        let observation = HandObservation {
            label: Handedness::Left,
            landmarks: [LandmarkPoint::new(1.0, 2.0, 3.0); 21],
        };
        let smoothed = [LandmarkPoint::new(4.0, 5.0, 6.0); 21];

        let ctx = HandContext::new(observation);
        assert_eq!(ctx.stage_name(), "Ingested");
        let mut ctx = ctx.into_smoothed(smoothed);
        assert_eq!(ctx.landmarks(), &smoothed);
        ctx.record_finger_state();
        let fist = FingerState::from_bits([0, 0, 0, 0, 0]);
        let mut ctx = ctx.into_classified(fist, GestureLabel::Fist);
        ctx.record_actions();

        assert_eq!(ctx.stage_name(), "Classified");
        assert_eq!(ctx.label(), Handedness::Left);
        assert_eq!(ctx.gesture(), GestureLabel::Fist);
        assert_eq!(ctx.raw_landmarks()[0], LandmarkPoint::new(1.0, 2.0, 3.0));
        assert_eq!(ctx.landmarks()[0], LandmarkPoint::new(4.0, 5.0, 6.0));
        assert_eq!(ctx.metrics().stages().count(), 4);
    }
}
