use crate::common::{HandObservation, Handedness};
use crate::config::Settings;
use crate::pipeline::context::{HandContext, HandMetrics};
use crate::pipeline::orchestration::session::GestureSession;
use crate::pipeline::services::action_machine::GestureActionMachine;
use crate::pipeline::services::finger_classifier::fingers_up;
use crate::pipeline::services::gesture_classifier::classify;
use crate::pipeline::services::smoother::LandmarkSmoother;
use crate::pipeline::types::{FingerState, GestureActions, GestureLabel};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Result of running one hand through smoothing, classification and actions.
#[derive(Debug, Clone)]
pub struct HandReport {
    pub label: Handedness,
    pub fingers: FingerState,
    pub gesture: GestureLabel,
    pub actions: GestureActions,
    pub metrics: HandMetrics,
}

/// What the overlay shows: the last handled hand, or "None" when no hand was seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub gesture: Option<GestureLabel>,
    pub handedness: Option<Handedness>,
}

impl DisplayState {
    pub fn gesture_text(&self) -> &'static str {
        self.gesture.map_or("None", |g| g.display_name())
    }

    pub fn handedness_text(&self) -> &'static str {
        self.handedness.map_or("None", |h| h.as_str())
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gesture: {} | Hand: {}", self.gesture_text(), self.handedness_text())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    pub hands: Vec<HandReport>,
    pub display: DisplayState,
    /// Hands whose smoothing history was dropped at the end of this frame.
    pub forgotten: Vec<Handedness>,
    pub processing_time: Duration,
}

/// Smoother → finger state → gesture → actions, once per detected hand.
///
/// Holds only immutable tuning; all cross-frame state lives in [`GestureSession`].
#[derive(Debug, Clone)]
pub struct GesturePipeline {
    smoother: LandmarkSmoother,
    actions: GestureActionMachine,
    reset_after_missed_frames: Option<u32>,
    segment_strokes: bool,
}

impl GesturePipeline {
    pub fn new(settings: &Settings) -> Self {
        Self {
            smoother: LandmarkSmoother::new(settings.smoothing.alpha),
            actions: GestureActionMachine::new(&settings.pointer, &settings.volume),
            reset_after_missed_frames: settings.smoothing.reset_after_missed_frames,
            segment_strokes: settings.drawing.segment_strokes,
        }
    }

    /// Hands are processed in detector order and never influence each other, except that
    /// the last one decides the display state and the drawing toggle.
    ///
    /// With stroke segmentation on, the current stroke ends on a frame where hands were
    /// seen but none of them held the peace gesture. Frames without hands keep it open.
    #[instrument(skip_all, fields(hands = hands.len()))]
    pub fn process_frame(
        &self,
        session: &mut GestureSession,
        hands: Vec<HandObservation>,
        frame_size: (u32, u32),
    ) -> FrameReport {
        let start = Instant::now();
        let seen: Vec<Handedness> = hands.iter().map(|hand| hand.label).collect();

        let reports: Vec<HandReport> = hands
            .into_iter()
            .map(|hand| self.process_hand(session, hand, frame_size))
            .collect();

        if self.segment_strokes
            && !reports.is_empty()
            && reports.iter().all(|hand| hand.gesture != GestureLabel::Peace)
        {
            session.strokes.end_stroke();
        }

        let display = reports
            .last()
            .map(|last| DisplayState {
                gesture: Some(last.gesture),
                handedness: Some(last.label),
            })
            .unwrap_or_default();

        let forgotten = session
            .smoothing
            .end_frame(&seen, self.reset_after_missed_frames);

        FrameReport {
            hands: reports,
            display,
            forgotten,
            processing_time: start.elapsed(),
        }
    }

    pub fn process_hand(
        &self,
        session: &mut GestureSession,
        hand: HandObservation,
        frame_size: (u32, u32),
    ) -> HandReport {
        let ctx = HandContext::new(hand);

        let smoothed = self
            .smoother
            .smooth(&mut session.smoothing, ctx.label(), ctx.raw_landmarks());
        let mut ctx = ctx.into_smoothed(smoothed);

        let fingers = fingers_up(ctx.landmarks(), ctx.label());
        ctx.record_finger_state();

        let gesture = classify(&fingers, ctx.landmarks());
        let mut ctx = ctx.into_classified(fingers, gesture);

        let actions = self.actions.handle(
            gesture,
            ctx.landmarks(),
            frame_size,
            &mut session.strokes,
            &mut session.drawing,
        );
        ctx.record_actions();

        debug!(
            "{} hand: fingers {} -> {} in {}us",
            ctx.label(),
            fingers,
            gesture,
            ctx.metrics().total().as_micros()
        );

        HandReport {
            label: ctx.label(),
            fingers,
            gesture,
            actions,
            metrics: ctx.into_metrics(),
        }
    }
}

impl Default for GesturePipeline {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
