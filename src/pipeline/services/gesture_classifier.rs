use crate::common::landmark::{Landmarks, pinch_distance};
use crate::pipeline::types::{FingerState, GestureLabel};

/// Thumb and index tips closer than this (pixels) may read as a pinch.
pub const PINCH_DISTANCE_THRESHOLD: f32 = 40.0;

type GesturePredicate = fn(&FingerState, &Landmarks) -> bool;

/// Rules in evaluation order. The first match wins, so the pinch rule only sees hands
/// none of the exact finger patterns above it claimed.
const GESTURE_RULES: [(GesturePredicate, GestureLabel); 5] = [
    (is_open_palm, GestureLabel::OpenPalm),
    (is_fist, GestureLabel::Fist),
    (is_pointing, GestureLabel::Pointing),
    (is_peace, GestureLabel::Peace),
    (is_pinch, GestureLabel::Pinch),
];

pub fn classify(fingers: &FingerState, landmarks: &Landmarks) -> GestureLabel {
    GESTURE_RULES
        .iter()
        .find(|(matches, _)| matches(fingers, landmarks))
        .map(|(_, label)| *label)
        .unwrap_or(GestureLabel::Unknown)
}

fn is_open_palm(fingers: &FingerState, _: &Landmarks) -> bool {
    fingers.bits() == [1, 1, 1, 1, 1]
}

fn is_fist(fingers: &FingerState, _: &Landmarks) -> bool {
    fingers.bits() == [0, 0, 0, 0, 0]
}

fn is_pointing(fingers: &FingerState, _: &Landmarks) -> bool {
    fingers.bits() == [0, 1, 0, 0, 0]
}

fn is_peace(fingers: &FingerState, _: &Landmarks) -> bool {
    fingers.bits() == [0, 1, 1, 0, 0]
}

// Thumb state is deliberately unconstrained.
fn is_pinch(fingers: &FingerState, landmarks: &Landmarks) -> bool {
    pinch_distance(landmarks) < PINCH_DISTANCE_THRESHOLD
        && fingers.without_thumb() == [true, false, false, false]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LandmarkPoint;
    use crate::common::landmark::{INDEX_TIP, THUMB_TIP};

    fn landmarks_with_pinch(distance: f32) -> Landmarks {
        let mut landmarks: Landmarks = [LandmarkPoint::new(300.0, 300.0, 0.0); 21];
        landmarks[THUMB_TIP] = LandmarkPoint::new(200.0, 200.0, 0.0);
        landmarks[INDEX_TIP] = LandmarkPoint::new(200.0 + distance, 200.0, 0.0);
        landmarks
    }

    #[test]
    fn exact_patterns_win_regardless_of_distance() {
        let cases = [
            ([1, 1, 1, 1, 1], GestureLabel::OpenPalm),
            ([0, 0, 0, 0, 0], GestureLabel::Fist),
            ([0, 1, 0, 0, 0], GestureLabel::Pointing),
            ([0, 1, 1, 0, 0], GestureLabel::Peace),
        ];
        for distance in [0.0, 10.0, 39.0, 100.0, 500.0] {
            let landmarks = landmarks_with_pinch(distance);
            for (bits, expected) in cases {
                assert_eq!(
                    classify(&FingerState::from_bits(bits), &landmarks),
                    expected,
                    "{bits:?} at distance {distance}"
                );
            }
        }
    }

    #[test]
    fn thumb_open_index_open_falls_through_to_pinch() {
        let fingers = FingerState::from_bits([1, 1, 0, 0, 0]);
        assert_eq!(classify(&fingers, &landmarks_with_pinch(30.0)), GestureLabel::Pinch);
        assert_eq!(classify(&fingers, &landmarks_with_pinch(100.0)), GestureLabel::Unknown);
    }

    #[test]
    fn pinch_threshold_is_strict() {
        let fingers = FingerState::from_bits([1, 1, 0, 0, 0]);
        assert_eq!(classify(&fingers, &landmarks_with_pinch(40.0)), GestureLabel::Unknown);
        assert_eq!(classify(&fingers, &landmarks_with_pinch(39.9)), GestureLabel::Pinch);
    }

    #[test]
    fn pinch_requires_only_index_among_fingers() {
        let landmarks = landmarks_with_pinch(10.0);
        assert_eq!(
            classify(&FingerState::from_bits([1, 1, 1, 0, 0]), &landmarks),
            GestureLabel::Unknown
        );
        assert_eq!(
            classify(&FingerState::from_bits([1, 0, 0, 0, 0]), &landmarks),
            GestureLabel::Unknown
        );
    }

    #[test]
    fn every_state_gets_exactly_one_label() {
        let landmarks = landmarks_with_pinch(20.0);
        for n in 0u8..32 {
            let bits = std::array::from_fn(|i| (n >> i) & 1);
            let label = classify(&FingerState::from_bits(bits), &landmarks);
            assert!(GestureLabel::ALL.contains(&label));
        }
    }
}
