use serde::{Deserialize, Serialize};
use std::fmt;

/// Open/closed flags in fixed order: thumb, index, middle, ring, pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FingerState([bool; 5]);

impl FingerState {
    pub const THUMB: usize = 0;
    pub const INDEX: usize = 1;
    pub const MIDDLE: usize = 2;
    pub const RING: usize = 3;
    pub const PINKY: usize = 4;

    pub const fn new(fingers: [bool; 5]) -> Self {
        Self(fingers)
    }

    /// Builds a state from 0/1 flags, any non-zero value counting as open.
    pub const fn from_bits(bits: [u8; 5]) -> Self {
        Self([bits[0] != 0, bits[1] != 0, bits[2] != 0, bits[3] != 0, bits[4] != 0])
    }

    pub fn bits(&self) -> [u8; 5] {
        self.0.map(u8::from)
    }

    pub fn fingers(&self) -> &[bool; 5] {
        &self.0
    }

    pub fn thumb(&self) -> bool {
        self.0[Self::THUMB]
    }

    /// Index through pinky, thumb excluded.
    pub fn without_thumb(&self) -> &[bool] {
        &self.0[Self::INDEX..]
    }

    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|open| **open).count()
    }
}

impl fmt::Display for FingerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.bits();
        write!(f, "[{a},{b},{c},{d},{e}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip_order() {
        let state = FingerState::from_bits([0, 1, 1, 0, 0]);
        assert!(!state.thumb());
        assert_eq!(state.without_thumb(), &[true, true, false, false]);
        assert_eq!(state.bits(), [0, 1, 1, 0, 0]);
        assert_eq!(state.open_count(), 2);
        assert_eq!(state.to_string(), "[0,1,1,0,0]");
    }
}
