use crate::{
    common::{Frame, HandObservation},
    config::Settings,
    error::AppError,
    intake::{FrameSource, HandDetector},
    output::{Actuator, HudState, Renderer},
    pipeline::{
        FrameReport, GesturePipeline, GestureSession,
        orchestration::{PerformanceMonitor, PerformanceStats},
    },
};
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, error, info, warn};

const COMMAND_BUFFER_SIZE: usize = 16;

/// Out-of-band requests from the user, applied between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ClearDrawing,
    Quit,
}

#[derive(Clone)]
pub struct CommandHandle {
    command_tx: mpsc::Sender<Command>,
}

impl CommandHandle {
    pub async fn send(&self, command: Command) -> Result<(), AppError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| AppError::Coordinator("command channel closed".to_string()))
    }

    pub fn try_send(&self, command: Command) -> Result<(), AppError> {
        self.command_tx
            .try_send(command)
            .map_err(|e| AppError::Coordinator(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: PerformanceStats,
    pub stroke_points: usize,
    pub quit_requested: bool,
}

/// Drives the frame loop: read, detect, run the gesture pipeline, dispatch, render.
/// Frames are handled strictly one after another.
pub struct Coordinator {
    pipeline: GesturePipeline,
    session: GestureSession,
    monitor: PerformanceMonitor,
    max_hands: usize,
    source: Box<dyn FrameSource>,
    detector: Box<dyn HandDetector>,
    renderer: Box<dyn Renderer>,
    actuator: Box<dyn Actuator>,
    command_tx: mpsc::Sender<Command>,
    command_rx: mpsc::Receiver<Command>,
}

impl Coordinator {
    pub fn command_handle(&self) -> CommandHandle {
        CommandHandle {
            command_tx: self.command_tx.clone(),
        }
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn stats(&self) -> &PerformanceStats {
        self.monitor.stats()
    }

    pub async fn run(&mut self) -> Result<RunSummary, AppError> {
        info!(
            "Starting gesture loop ({} -> {})",
            self.source.name(),
            self.detector.name()
        );
        let mut quit_requested = false;

        loop {
            if self.apply_commands() {
                info!("Quit requested");
                quit_requested = true;
                break;
            }

            let frame = match self.source.next_frame().await {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    info!("Frame source reached end of stream");
                    break;
                }
                Err(e) => {
                    warn!("Unreadable frame, stopping: {}", e);
                    break;
                }
            };

            let fps = self.monitor.tick(std::time::Instant::now());
            let hands = match self.ingest(&frame).await {
                Ok(hands) => hands,
                Err(e) if e.is_frame_local() => {
                    warn!("Rejected frame {}: {}", frame.frame_id(), e);
                    self.monitor.record_rejected();
                    continue;
                }
                Err(e) => return Err(e),
            };

            let report = self.pipeline.process_frame(
                &mut self.session,
                hands,
                (frame.width(), frame.height()),
            );
            self.monitor
                .record_processing(report.processing_time, report.hands.len());

            self.dispatch(&report);
            let hud = HudState {
                fps,
                display: report.display,
                drawing: self.session.is_drawing(),
                volume: report.hands.iter().rev().find_map(|hand| hand.actions.volume),
            };
            self.renderer.render(&hud, self.session.strokes());
        }

        let summary = RunSummary {
            stats: self.monitor.stats().clone(),
            stroke_points: self.session.strokes().len(),
            quit_requested,
        };
        info!(
            "Gesture loop stopped after {} frames ({} rejected)",
            summary.stats.total_frames, summary.stats.rejected_frames
        );
        Ok(summary)
    }

    /// Applies every pending command; returns true when the loop should stop.
    fn apply_commands(&mut self) -> bool {
        loop {
            match self.command_rx.try_recv() {
                Ok(Command::ClearDrawing) => self.session.clear_drawing(),
                Ok(Command::Quit) => return true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    async fn ingest(&mut self, frame: &Frame) -> Result<Vec<HandObservation>, AppError> {
        let raw_hands = self.detector.detect(frame).await?;
        if raw_hands.len() > self.max_hands {
            debug!(
                "Detector returned {} hands, keeping the first {}",
                raw_hands.len(),
                self.max_hands
            );
        }
        raw_hands
            .iter()
            .take(self.max_hands)
            .map(|raw| HandObservation::from_raw(raw, frame.width(), frame.height()))
            .collect()
    }

    fn dispatch(&mut self, report: &FrameReport) {
        for hand in &report.hands {
            if let Some(target) = hand.actions.pointer {
                if let Err(e) = self.actuator.move_pointer(target) {
                    error!("Pointer move failed: {}", e);
                }
            }
            if let Some(intent) = hand.actions.volume {
                if let Err(e) = self.actuator.volume(intent) {
                    error!("Volume change failed: {}", e);
                }
            }
        }
    }
}

pub struct CoordinatorBuilder {
    settings: Settings,
    source: Option<Box<dyn FrameSource>>,
    detector: Option<Box<dyn HandDetector>>,
    renderer: Option<Box<dyn Renderer>>,
    actuator: Option<Box<dyn Actuator>>,
}

impl CoordinatorBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            source: None,
            detector: None,
            renderer: None,
            actuator: None,
        }
    }

    // Sets the smoothing factor, this will override the loaded configuration.
    pub fn smoothing_alpha(mut self, alpha: f32) -> Self {
        self.settings.smoothing.alpha = alpha;
        self
    }

    // Sets the target screen size for pointer mapping, this will override the loaded configuration.
    pub fn screen_size(mut self, width: f32, height: f32) -> Self {
        self.settings.pointer.screen_width = width;
        self.settings.pointer.screen_height = height;
        self
    }

    // Enables stroke boundaries, this will override the loaded configuration.
    pub fn segment_strokes(mut self, segment_strokes: bool) -> Self {
        self.settings.drawing.segment_strokes = segment_strokes;
        self
    }

    pub fn source(mut self, source: Box<dyn FrameSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn detector(mut self, detector: Box<dyn HandDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn actuator(mut self, actuator: Box<dyn Actuator>) -> Self {
        self.actuator = Some(actuator);
        self
    }

    pub fn build(self) -> Result<Coordinator, AppError> {
        let source = self
            .source
            .ok_or(AppError::Coordinator("Frame source not set".to_string()))?;
        let detector = self
            .detector
            .ok_or(AppError::Coordinator("Hand detector not set".to_string()))?;
        let renderer = self
            .renderer
            .ok_or(AppError::Coordinator("Renderer not set".to_string()))?;
        let actuator = self
            .actuator
            .ok_or(AppError::Coordinator("Actuator not set".to_string()))?;
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER_SIZE);

        Ok(Coordinator {
            pipeline: GesturePipeline::new(&self.settings),
            session: GestureSession::new(),
            monitor: PerformanceMonitor::new(),
            max_hands: self.settings.detector.max_hands,
            source,
            detector,
            renderer,
            actuator,
            command_tx,
            command_rx,
        })
    }
}
