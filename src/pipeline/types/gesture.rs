use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureLabel {
    OpenPalm,
    Fist,
    Pointing,
    Peace,
    Pinch,
    Unknown,
}

impl GestureLabel {
    pub const ALL: [GestureLabel; 6] = [
        GestureLabel::OpenPalm,
        GestureLabel::Fist,
        GestureLabel::Pointing,
        GestureLabel::Peace,
        GestureLabel::Pinch,
        GestureLabel::Unknown,
    ];

    /// Text shown on the overlay.
    pub fn display_name(&self) -> &'static str {
        match self {
            GestureLabel::OpenPalm => "Open Palm",
            GestureLabel::Fist => "Fist",
            GestureLabel::Pointing => "Pointing",
            GestureLabel::Peace => "Peace",
            GestureLabel::Pinch => "Pinch",
            GestureLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
