use crate::common::landmark::{LANDMARK_COUNT, LandmarkPoint, Landmarks};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Left/right classification reported by the detector. Doubles as the smoothing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handedness {
    type Err = AppError;

    /// Accepts exactly "Left" and "Right".
    ///
    /// Any other label is rejected rather than read as "Left". A loose reading would
    /// route unknown labels through the left-hand thumb rule and mirror the thumb test.
    /// The caller skips the frame instead.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Left" => Ok(Handedness::Left),
            "Right" => Ok(Handedness::Right),
            other => Err(AppError::UnknownHandedness(other.to_string())),
        }
    }
}

/// A hand as the detector emits it: a label and normalized `[x, y, z]` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHand {
    pub label: String,
    pub landmarks: Vec<[f32; 3]>,
}

/// One detected hand for one frame, in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
    pub label: Handedness,
    pub landmarks: Landmarks,
}

impl HandObservation {
    /// Rejects anything that is not exactly one full skeleton.
    pub fn new(label: Handedness, points: Vec<LandmarkPoint>) -> Result<Self, AppError> {
        let actual = points.len();
        let landmarks: Landmarks = points.try_into().map_err(|_| AppError::MalformedLandmarks {
            expected: LANDMARK_COUNT,
            actual,
        })?;
        Ok(Self { label, landmarks })
    }

    /// Scales normalized detector output to frame pixels, truncating x and y to whole pixels.
    pub fn from_raw(raw: &RawHand, width: u32, height: u32) -> Result<Self, AppError> {
        let label = raw.label.parse::<Handedness>()?;
        let points = raw
            .landmarks
            .iter()
            .map(|&[x, y, z]| {
                LandmarkPoint::new(
                    (x * width as f32).trunc(),
                    (y * height as f32).trunc(),
                    z,
                )
            })
            .collect();
        Self::new(label, points)
    }
}
