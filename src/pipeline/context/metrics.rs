use indexmap::IndexMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandStage {
    Smoothing,
    FingerState,
    Gesture,
    Actions,
}

impl HandStage {
    pub fn name(&self) -> &'static str {
        match self {
            HandStage::Smoothing => "Smoothing",
            HandStage::FingerState => "FingerState",
            HandStage::Gesture => "Gesture",
            HandStage::Actions => "Actions",
        }
    }
}

/// Stage durations for one hand, in execution order.
#[derive(Debug, Clone, Default)]
pub struct HandMetrics {
    stage_durations: IndexMap<HandStage, Duration>,
}

impl HandMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: HandStage, duration: Duration) {
        *self.stage_durations.entry(stage).or_default() += duration;
    }

    pub fn duration(&self, stage: HandStage) -> Duration {
        self.stage_durations.get(&stage).copied().unwrap_or_default()
    }

    pub fn total(&self) -> Duration {
        self.stage_durations.values().sum()
    }

    pub fn stages(&self) -> impl Iterator<Item = (HandStage, Duration)> + '_ {
        self.stage_durations.iter().map(|(stage, d)| (*stage, *d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_stage_order_and_accumulates() {
        let mut metrics = HandMetrics::new();
        metrics.record(HandStage::Smoothing, Duration::from_micros(5));
        metrics.record(HandStage::Gesture, Duration::from_micros(3));
        metrics.record(HandStage::Smoothing, Duration::from_micros(2));

        assert_eq!(metrics.duration(HandStage::Smoothing), Duration::from_micros(7));
        assert_eq!(metrics.duration(HandStage::Actions), Duration::ZERO);
        assert_eq!(metrics.total(), Duration::from_micros(10));
        let order: Vec<_> = metrics.stages().map(|(s, _)| s).collect();
        assert_eq!(order, vec![HandStage::Smoothing, HandStage::Gesture]);
    }
}
