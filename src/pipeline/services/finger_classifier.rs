use crate::common::Handedness;
use crate::common::landmark::{FINGER_TIPS, Landmarks, THUMB_IP, THUMB_TIP};
use crate::pipeline::types::FingerState;

/// Derives which fingers are extended from one smoothed skeleton.
///
/// The thumb is judged horizontally against its inner joint, mirrored by handedness,
/// which assumes a selfie-view (horizontally flipped) frame. The other four fingers
/// are open when the tip sits above the joint two indices before it.
pub fn fingers_up(landmarks: &Landmarks, handedness: Handedness) -> FingerState {
    let tip = landmarks[THUMB_TIP];
    let joint = landmarks[THUMB_IP];
    let thumb = match handedness {
        Handedness::Right => tip.x < joint.x,
        Handedness::Left => tip.x > joint.x,
    };

    let mut fingers = [thumb, false, false, false, false];
    for (slot, &tip_id) in fingers[1..].iter_mut().zip(FINGER_TIPS.iter()) {
        *slot = landmarks[tip_id].y < landmarks[tip_id - 2].y;
    }
    FingerState::new(fingers)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::common::LandmarkPoint;
    use crate::common::landmark::*;

    /// A skeleton whose finger flags are `bits` when read as a right hand.
    /// Index and thumb tips are placed at the given pixel positions.
    pub fn hand_with(bits: [u8; 5], thumb_tip: (f32, f32), index_tip: (f32, f32)) -> Landmarks {
        let mut landmarks: Landmarks = [LandmarkPoint::new(300.0, 300.0, 0.0); 21];

        let thumb_offset = if bits[0] != 0 { 20.0 } else { -20.0 };
        landmarks[THUMB_IP] = LandmarkPoint::new(thumb_tip.0 + thumb_offset, thumb_tip.1, 0.0);
        landmarks[THUMB_TIP] = LandmarkPoint::new(thumb_tip.0, thumb_tip.1, 0.0);

        for (bit, &tip_id) in bits[1..].iter().zip(FINGER_TIPS.iter()) {
            let tip = if tip_id == INDEX_TIP {
                LandmarkPoint::new(index_tip.0, index_tip.1, 0.0)
            } else {
                LandmarkPoint::new(300.0, 200.0, 0.0)
            };
            let joint_y = if *bit != 0 { tip.y + 40.0 } else { tip.y - 40.0 };
            landmarks[tip_id] = tip;
            landmarks[tip_id - 2] = LandmarkPoint::new(tip.x, joint_y, 0.0);
        }
        landmarks
    }
}
