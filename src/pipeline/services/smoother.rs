use crate::common::{Handedness, LandmarkPoint, Landmarks};
use indexmap::IndexMap;
use tracing::debug;

/// Last smoothed skeleton per hand label, in order of first sighting.
#[derive(Debug, Clone, Default)]
pub struct SmoothingState {
    entries: IndexMap<Handedness, SmoothedHand>,
}

#[derive(Debug, Clone)]
struct SmoothedHand {
    landmarks: Landmarks,
    missed_frames: u32,
}

impl SmoothingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self, label: Handedness) -> Option<&Landmarks> {
        self.entries.get(&label).map(|entry| &entry.landmarks)
    }

    pub fn tracked_hands(&self) -> impl Iterator<Item = Handedness> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the history for one hand; its next sighting passes through unblended.
    pub fn forget(&mut self, label: Handedness) -> bool {
        self.entries.shift_remove(&label).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Ages the history of every hand missing from this frame. With
    /// `reset_after = Some(n)` a hand unseen for more than `n` consecutive frames is
    /// forgotten; with `None` stale history is kept indefinitely.
    pub fn end_frame(&mut self, seen: &[Handedness], reset_after: Option<u32>) -> Vec<Handedness> {
        for (label, entry) in self.entries.iter_mut() {
            if seen.contains(label) {
                entry.missed_frames = 0;
            } else {
                entry.missed_frames = entry.missed_frames.saturating_add(1);
            }
        }

        let Some(limit) = reset_after else {
            return Vec::new();
        };

        let expired: Vec<Handedness> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.missed_frames > limit)
            .map(|(label, _)| *label)
            .collect();
        for label in &expired {
            self.entries.shift_remove(label);
            debug!(
                "Dropped smoothing history for {} hand after {} missed frames",
                label,
                limit + 1
            );
        }
        expired
    }

    fn store(&mut self, label: Handedness, landmarks: Landmarks) {
        self.entries.insert(
            label,
            SmoothedHand {
                landmarks,
                missed_frames: 0,
            },
        );
    }
}

/// Exponential moving average over a hand skeleton, keyed by handedness.
#[derive(Debug, Clone, Copy)]
pub struct LandmarkSmoother {
    alpha: f32,
}

impl LandmarkSmoother {
    pub const DEFAULT_ALPHA: f32 = 0.6;

    /// `alpha` is the weight of the newest sample and is expected in (0, 1].
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Blends `current` with the stored history for `label` and stores the result.
    /// The first sighting of a label is returned unchanged.
    pub fn smooth(
        &self,
        state: &mut SmoothingState,
        label: Handedness,
        current: &Landmarks,
    ) -> Landmarks {
        let smoothed = match state.previous(label) {
            None => *current,
            Some(previous) => {
                let mut out = *current;
                for (point, prev) in out.iter_mut().zip(previous.iter()) {
                    *point = self.blend(point, prev);
                }
                out
            }
        };
        state.store(label, smoothed);
        smoothed
    }

    fn blend(&self, current: &LandmarkPoint, previous: &LandmarkPoint) -> LandmarkPoint {
        LandmarkPoint {
            x: ema(current.x, previous.x, self.alpha),
            y: ema(current.y, previous.y, self.alpha),
            z: ema(current.z, previous.z, self.alpha),
        }
    }
}

impl Default for LandmarkSmoother {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA)
    }
}

fn ema(current: f32, previous: f32, alpha: f32) -> f32 {
    // A constant signal is a fixed point; skip the arithmetic so rounding cannot move it.
    if current == previous {
        return current;
    }
    alpha * current + (1.0 - alpha) * previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LANDMARK_COUNT;

    fn skeleton(f: impl Fn(usize) -> LandmarkPoint) -> Landmarks {
        std::array::from_fn(f)
    }

    #[test]
    fn first_observation_passes_through() {
        let smoother = LandmarkSmoother::default();
        let mut state = SmoothingState::new();
        let input = skeleton(|i| LandmarkPoint::new(i as f32, 2.0 * i as f32, 0.1));

        let out = smoother.smooth(&mut state, Handedness::Right, &input);

        assert_eq!(out, input);
        assert_eq!(state.previous(Handedness::Right), Some(&input));
    }

    #[test]
    fn constant_stream_is_reproduced_exactly() {
        for alpha in [0.1_f32, 0.33, 0.6, 0.9, 1.0] {
            let smoother = LandmarkSmoother::new(alpha);
            let mut state = SmoothingState::new();
            let input = skeleton(|i| LandmarkPoint::new(123.7 + i as f32, 45.3, -0.042));

            smoother.smooth(&mut state, Handedness::Left, &input);
            let second = smoother.smooth(&mut state, Handedness::Left, &input);
            let third = smoother.smooth(&mut state, Handedness::Left, &input);

            assert_eq!(second, input, "alpha {alpha}");
            assert_eq!(third, input, "alpha {alpha}");
        }
    }

    #[test]
    fn blend_matches_weighted_average() {
        let alpha = 0.6_f32;
        let smoother = LandmarkSmoother::new(alpha);
        let mut state = SmoothingState::new();
        let previous = skeleton(|i| LandmarkPoint::new(i as f32, 100.0, 0.5));
        let current = skeleton(|i| LandmarkPoint::new(10.0 + i as f32, 80.0, -0.25));

        smoother.smooth(&mut state, Handedness::Right, &previous);
        let out = smoother.smooth(&mut state, Handedness::Right, &current);

        for i in 0..LANDMARK_COUNT {
            let c = current[i];
            let p = previous[i];
            assert_eq!(out[i].x, alpha * c.x + (1.0 - alpha) * p.x);
            assert_eq!(out[i].y, alpha * c.y + (1.0 - alpha) * p.y);
            assert_eq!(out[i].z, alpha * c.z + (1.0 - alpha) * p.z);
        }
        assert_eq!(state.previous(Handedness::Right), Some(&out));
    }

    #[test]
    fn labels_are_smoothed_independently() {
        let smoother = LandmarkSmoother::new(0.5);
        let mut state = SmoothingState::new();
        let left = skeleton(|_| LandmarkPoint::new(0.0, 0.0, 0.0));
        let right = skeleton(|_| LandmarkPoint::new(100.0, 100.0, 0.0));

        smoother.smooth(&mut state, Handedness::Left, &left);
        let out = smoother.smooth(&mut state, Handedness::Right, &right);

        assert_eq!(out, right);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn stale_history_is_reused_by_default() {
        let smoother = LandmarkSmoother::new(0.5);
        let mut state = SmoothingState::new();
        let before = skeleton(|_| LandmarkPoint::new(0.0, 0.0, 0.0));
        let after = skeleton(|_| LandmarkPoint::new(100.0, 50.0, 0.0));

        smoother.smooth(&mut state, Handedness::Right, &before);
        for _ in 0..30 {
            assert!(state.end_frame(&[], None).is_empty());
        }
        let out = smoother.smooth(&mut state, Handedness::Right, &after);

        assert_eq!(out[0], LandmarkPoint::new(50.0, 25.0, 0.0));
    }

    #[test]
    fn gap_reset_forgets_missing_hand() {
        let smoother = LandmarkSmoother::new(0.5);
        let mut state = SmoothingState::new();
        let before = skeleton(|_| LandmarkPoint::new(0.0, 0.0, 0.0));
        let after = skeleton(|_| LandmarkPoint::new(100.0, 50.0, 0.0));

        smoother.smooth(&mut state, Handedness::Right, &before);
        state.end_frame(&[Handedness::Right], Some(2));
        assert!(state.end_frame(&[], Some(2)).is_empty());
        assert!(state.end_frame(&[], Some(2)).is_empty());
        assert_eq!(state.end_frame(&[], Some(2)), vec![Handedness::Right]);

        let out = smoother.smooth(&mut state, Handedness::Right, &after);
        assert_eq!(out, after);
    }

    #[test]
    fn forget_and_clear() {
        let smoother = LandmarkSmoother::default();
        let mut state = SmoothingState::new();
        let hand = skeleton(|_| LandmarkPoint::default());
        smoother.smooth(&mut state, Handedness::Left, &hand);
        smoother.smooth(&mut state, Handedness::Right, &hand);

        assert!(state.forget(Handedness::Left));
        assert!(!state.forget(Handedness::Left));
        assert_eq!(state.tracked_hands().collect::<Vec<_>>(), vec![Handedness::Right]);
        state.clear();
        assert!(state.is_empty());
    }
}
