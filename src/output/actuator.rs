use crate::error::AppError;
use crate::output::Actuator;
use crate::pipeline::{PointerMove, VolumeIntent};
use tracing::info;

/// Logs requests instead of touching the OS; used for replays and dry runs.
/// Nothing is retained between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActuator;

impl LoggingActuator {
    pub fn new() -> Self {
        Self
    }
}

impl Actuator for LoggingActuator {
    fn move_pointer(&mut self, target: PointerMove) -> Result<(), AppError> {
        info!("Pointer -> ({:.0}, {:.0})", target.x, target.y);
        Ok(())
    }

    fn volume(&mut self, intent: VolumeIntent) -> Result<(), AppError> {
        info!("Volume {}", intent.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_requests_without_keeping_them() {
        let mut actuator = LoggingActuator::new();
        for i in 0..10_000 {
            let target = PointerMove { x: i as f32, y: 0.0 };
            assert!(actuator.move_pointer(target).is_ok());
        }
        assert!(actuator.volume(VolumeIntent::Up).is_ok());
        assert_eq!(std::mem::size_of::<LoggingActuator>(), 0);
    }
}
