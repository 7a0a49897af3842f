//! Gesture classification.
//!
//! Two channels feed the same [`SharedState`]: hand landmarks from a camera
//! tracker and raw touch events. Both may be active at once; whichever sample
//! is applied last wins.
//!
//! | Input | Condition | Effect |
//! |---|---|---|
//! | Two hands | wrist distance < 0.2 | CONDENSED, "Close Hands" |
//! | Two hands | wrist distance > 0.4 | EXPANDED, "Open Hands" |
//! | One hand | thumb/index tips < 0.05 apart | SUPERPOSITION, "Quantum Pinch" |
//! | One hand | otherwise | rotation speed from palm x, "One Hand Spin" |
//! | No hands | | rotation speed reset, gesture cleared |
//! | Two fingers | spread grows > 50 px | EXPANDED, "Touch: Expand" |
//! | Two fingers | spread shrinks > 50 px | CONDENSED, "Touch: Condense" |
//! | One finger | horizontal drag | rotation speed from drag, "Touch: Spin" |
//!
//! Classification never fails: malformed input is treated as "no signal".

use crate::constants::*;
use crate::landmarks::HandFrame;
use crate::state::{GestureKind, ShapeMode, SharedState};
use crate::touch::{TouchSample, TouchTracker};

/// What a batch of samples changed, for HUD refresh and audio cues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureOutcome {
    pub gesture_changed: bool,
    pub mode_changed: bool,
}

impl GestureOutcome {
    pub fn merge(&mut self, other: GestureOutcome) {
        self.gesture_changed |= other.gesture_changed;
        self.mode_changed |= other.mode_changed;
    }
}

#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    touch: TouchTracker,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&self) -> &TouchTracker {
        &self.touch
    }

    /// Apply one tracker result.
    pub fn classify_landmarks(
        &mut self,
        frame: &HandFrame,
        state: &mut SharedState,
    ) -> GestureOutcome {
        let mode_before = state.shape_mode;
        let hands = frame.complete_hands();
        let gesture_changed = match hands.as_slice() {
            [] => {
                state.reset_rotation_speed();
                state.set_gesture(None)
            }
            [a, b] => {
                let dist = a.wrist().distance(b.wrist());
                if dist < HANDS_CLOSE_DIST {
                    state.shape_mode = ShapeMode::Condensed;
                    state.set_gesture(Some(GestureKind::CloseHands))
                } else if dist > HANDS_OPEN_DIST {
                    state.shape_mode = ShapeMode::Expanded;
                    state.set_gesture(Some(GestureKind::OpenHands))
                } else {
                    false
                }
            }
            [hand] => {
                if hand.thumb_tip().distance(hand.index_tip()) < PINCH_DIST {
                    state.shape_mode = ShapeMode::Superposition;
                    state.set_gesture(Some(GestureKind::QuantumPinch))
                } else {
                    let cx = hand.palm_center().x;
                    state.params.rotation_speed = (cx - PALM_SPIN_CENTER) * PALM_SPIN_GAIN;
                    state.set_gesture(Some(GestureKind::OneHandSpin))
                }
            }
            // Trackers are configured for two hands; anything more is noise.
            _ => false,
        };
        GestureOutcome {
            gesture_changed,
            mode_changed: state.shape_mode != mode_before,
        }
    }

    /// Apply one touch event at time `now` (seconds).
    pub fn classify_touch(
        &mut self,
        sample: &TouchSample,
        now: f64,
        state: &mut SharedState,
    ) -> GestureOutcome {
        let mode_before = state.shape_mode;
        let gesture_changed = self.touch.handle(sample, now, state);
        GestureOutcome {
            gesture_changed,
            mode_changed: state.shape_mode != mode_before,
        }
    }

    /// Run time-based rules (the post-swipe settle reset).
    pub fn tick(&mut self, now: f64, state: &mut SharedState) {
        self.touch.tick(now, state);
    }
}
