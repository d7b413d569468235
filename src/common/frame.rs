use chrono::{DateTime, Utc};
use image::DynamicImage;
use std::sync::Arc;
use uuid::Uuid;

/// A captured camera frame. The pixel buffer is shared so handing the frame to the
/// detector and the renderer never copies it. Sources that only know the frame size
/// (replays) carry no pixels at all.
#[derive(Clone)]
pub struct Frame {
    image: Option<Arc<DynamicImage>>,
    width: u32,
    height: u32,
    captured_at: DateTime<Utc>,
    frame_id: Uuid,
}

impl Frame {
    pub fn new(image: DynamicImage, captured_at: DateTime<Utc>, frame_id: Uuid) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            image: Some(Arc::new(image)),
            captured_at,
            frame_id,
        }
    }

    /// A frame of the given size with no pixel buffer behind it.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            image: None,
            width,
            height,
            captured_at: Utc::now(),
            frame_id: Uuid::new_v4(),
        }
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }
}
