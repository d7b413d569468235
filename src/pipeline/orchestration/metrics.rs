use std::time::{Duration, Instant};

/// Frame counters and timing for the overlay and for debugging slow frames.
#[derive(Debug, Clone, Default)]
pub struct PerformanceStats {
    pub total_frames: usize,
    pub frames_with_hands: usize,
    pub rejected_frames: usize,
    /// Instantaneous rate from the gap to the previous frame.
    pub frames_per_second: f32,
    pub average_processing_us: f32,
    pub max_processing_us: u64,
}

pub struct PerformanceMonitor {
    stats: PerformanceStats,
    last_frame: Option<Instant>,
}

impl PerformanceMonitor {
    const ALPHA: f32 = 0.1; // EWMA smoothing factor

    pub fn new() -> Self {
        Self {
            stats: PerformanceStats::default(),
            last_frame: None,
        }
    }

    pub fn stats(&self) -> &PerformanceStats {
        &self.stats
    }

    /// Marks the arrival of a frame and returns the FPS estimate. The first frame has no
    /// predecessor and reports 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.stats.total_frames += 1;
        let fps = match self.last_frame {
            Some(previous) => {
                let elapsed = now.duration_since(previous).as_secs_f32();
                if elapsed > 0.0 { 1.0 / elapsed } else { 0.0 }
            }
            None => 0.0,
        };
        self.last_frame = Some(now);
        self.stats.frames_per_second = fps;
        fps
    }

    pub fn record_processing(&mut self, duration: Duration, hands: usize) {
        let micros = duration.as_micros() as u64;
        if hands > 0 {
            self.stats.frames_with_hands += 1;
        }
        self.stats.average_processing_us =
            Self::update_ewma(self.stats.average_processing_us, micros, Self::ALPHA);
        self.stats.max_processing_us = self.stats.max_processing_us.max(micros);

        // Anything slower than a 30 fps budget is worth surfacing.
        if micros > 33_000 {
            tracing::warn!("Slow frame processing: {}us", micros);
        }
    }

    pub fn record_rejected(&mut self) {
        self.stats.rejected_frames += 1;
    }

    fn update_ewma(current: f32, new_value: u64, alpha: f32) -> f32 {
        current * (1.0 - alpha) + new_value as f32 * alpha
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}
