use gesture_pilot::{
    AppError, Command, CommandHandle, CoordinatorBuilder, Settings,
    intake::ReplayRecording,
    output::{HudRenderer, LoggingActuator},
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, error, info};

fn init_logging(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}

/// `c` clears the drawing, `q` quits.
fn spawn_keyboard(handle: CommandHandle) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let command = match line.trim() {
                "c" | "C" => Command::ClearDrawing,
                "q" | "Q" => Command::Quit,
                _ => continue,
            };
            if handle.send(command).await.is_err() || command == Command::Quit {
                break;
            }
        }
    })
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(config_path.as_deref())?;
    init_logging(settings.logging.max_level()?);

    if let Err(e) = settings.detector.verify_model() {
        error!("{}", e);
        return Err(e);
    }

    let recording_path = settings.replay.recording_path.clone().ok_or_else(|| {
        AppError::FrameSource("no replay recording configured (replay.recording_path)".to_string())
    })?;
    let recording = ReplayRecording::load(&recording_path).await?;
    let (source, detector) =
        recording.split((settings.replay.frame_width, settings.replay.frame_height));

    let mut coordinator = CoordinatorBuilder::new(settings)
        .source(Box::new(source))
        .detector(Box::new(detector))
        .renderer(Box::new(HudRenderer::new()))
        .actuator(Box::new(LoggingActuator::new()))
        .build()?;

    info!("Press 'q' + Enter to quit, 'c' + Enter to clear the drawing.");
    let keyboard = spawn_keyboard(coordinator.command_handle());

    let summary = coordinator.run().await?;
    keyboard.abort();

    info!(
        "Processed {} frames at {:.1}us average, {} stroke points",
        summary.stats.total_frames, summary.stats.average_processing_us, summary.stroke_points
    );
    Ok(())
}
