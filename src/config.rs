use crate::error::AppError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

const ENV_PREFIX: &str = "GESTURE_PILOT";
const DEFAULT_CONFIG_NAME: &str = "gesture_pilot";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub detector: DetectorSettings,
    pub smoothing: SmoothingSettings,
    pub pointer: PointerSettings,
    pub volume: VolumeSettings,
    pub drawing: DrawingSettings,
    pub replay: ReplaySettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Loads settings from an optional file, then lets `GESTURE_PILOT__SECTION__KEY`
    /// environment variables override individual values.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize::<Settings>()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectorSettings {
    pub model_path: PathBuf,
    pub max_hands: usize,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("hand_landmarker.task"),
            max_hands: 2,
        }
    }
}

impl DetectorSettings {
    /// The detector cannot start without its model asset; checked before the first frame.
    pub fn verify_model(&self) -> Result<&Path, AppError> {
        if self.model_path.is_file() {
            Ok(&self.model_path)
        } else {
            Err(AppError::ModelNotFound(self.model_path.clone()))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmoothingSettings {
    /// Weight of the newest sample.
    pub alpha: f32,
    /// Drop a hand's smoothing history after this many consecutive frames without it.
    /// `None` keeps stale history forever.
    pub reset_after_missed_frames: Option<u32>,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            alpha: 0.6,
            reset_after_missed_frames: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PointerSettings {
    pub frame_inset: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            frame_inset: 100.0,
            screen_width: 1920.0,
            screen_height: 1080.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VolumeSettings {
    pub down_below: f32,
    pub up_above: f32,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self {
            down_below: 50.0,
            up_above: 150.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    pub segment_strokes: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplaySettings {
    pub recording_path: Option<PathBuf>,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            recording_path: None,
            frame_width: 640,
            frame_height: 480,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingSettings {
    pub fn max_level(&self) -> Result<Level, AppError> {
        Level::from_str(&self.level).map_err(|_| AppError::InvalidLogLevel(self.level.clone()))
    }
}
