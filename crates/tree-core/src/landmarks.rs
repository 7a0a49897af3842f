//! Hand-landmark frames as delivered by an external tracker.
//!
//! Coordinates are normalized to 0..1 image space. Only a handful of the 21
//! landmarks are read: wrist, thumb tip, index tip and palm center.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hand {
    pub landmarks: Vec<Vec2>,
}

impl Hand {
    pub fn new(landmarks: Vec<Vec2>) -> Self {
        Self { landmarks }
    }

    /// A hand is usable when every landmark read by the classifier is present
    /// and finite.
    pub fn is_complete(&self) -> bool {
        [
            LANDMARK_WRIST,
            LANDMARK_THUMB_TIP,
            LANDMARK_INDEX_TIP,
            LANDMARK_PALM_CENTER,
        ]
        .iter()
        .all(|&i| self.landmarks.get(i).is_some_and(|p| p.is_finite()))
    }

    #[inline]
    pub(crate) fn wrist(&self) -> Vec2 {
        self.landmarks[LANDMARK_WRIST]
    }

    #[inline]
    pub(crate) fn thumb_tip(&self) -> Vec2 {
        self.landmarks[LANDMARK_THUMB_TIP]
    }

    #[inline]
    pub(crate) fn index_tip(&self) -> Vec2 {
        self.landmarks[LANDMARK_INDEX_TIP]
    }

    #[inline]
    pub(crate) fn palm_center(&self) -> Vec2 {
        self.landmarks[LANDMARK_PALM_CENTER]
    }

    /// Build a full 21-point hand with every landmark at `rest`, then apply
    /// the given overrides. Used by simulated trackers and tests.
    pub fn with_points(rest: Vec2, overrides: &[(usize, Vec2)]) -> Self {
        let mut landmarks = vec![rest; LANDMARKS_PER_HAND];
        for &(i, p) in overrides {
            if let Some(slot) = landmarks.get_mut(i) {
                *slot = p;
            }
        }
        Self { landmarks }
    }
}

/// One tracker result: zero, one or two hands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandFrame {
    pub hands: SmallVec<[Hand; 2]>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_hands(hands: impl IntoIterator<Item = Hand>) -> Self {
        Self {
            hands: hands.into_iter().collect(),
        }
    }

    /// Decode a flat `[x0, y0, x1, y1, ...]` buffer holding `hand_count`
    /// hands of 21 landmarks each. Missing or trailing coordinates shorten the
    /// last hand, which then fails [`Hand::is_complete`].
    pub fn from_flat(hand_count: usize, coords: &[f32]) -> Self {
        let per_hand = LANDMARKS_PER_HAND * 2;
        let hands = coords
            .chunks(per_hand)
            .take(hand_count)
            .map(|chunk| {
                Hand::new(
                    chunk
                        .chunks_exact(2)
                        .map(|xy| Vec2::new(xy[0], xy[1]))
                        .collect(),
                )
            })
            .collect();
        Self { hands }
    }

    /// Hands that can be classified; partial hands count as absent.
    pub fn complete_hands(&self) -> SmallVec<[&Hand; 2]> {
        self.hands.iter().filter(|h| h.is_complete()).collect()
    }
}
