use crate::constants::*;
use crate::state::{GestureKind, ShapeMode, SharedState};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// One touch event. `touches` lists the fingers still on the screen after
/// the event, in screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSample {
    pub phase: TouchPhase,
    pub touches: SmallVec<[Vec2; 2]>,
}

impl TouchSample {
    pub fn new(phase: TouchPhase, touches: &[Vec2]) -> Self {
        Self {
            phase,
            touches: touches.iter().copied().collect(),
        }
    }

    fn is_well_formed(&self) -> bool {
        self.touches.len() <= 2 && self.touches.iter().all(|p| p.is_finite())
    }
}

/// Pinch and swipe tracking for the touch channel.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    pinch_start_dist: f32,
    swipe_start_x: f32,
    swipe_active: bool,
    settle_deadline: Option<f64>,
}

impl TouchTracker {
    pub fn swipe_active(&self) -> bool {
        self.swipe_active
    }

    pub fn settle_pending(&self) -> bool {
        self.settle_deadline.is_some()
    }

    /// Apply one touch event at time `now` (seconds). Returns whether the
    /// gesture label changed.
    pub fn handle(&mut self, sample: &TouchSample, now: f64, state: &mut SharedState) -> bool {
        if !sample.is_well_formed() {
            return false;
        }
        match sample.phase {
            TouchPhase::Start => {
                self.settle_deadline = None;
                match sample.touches.as_slice() {
                    [a, b] => self.pinch_start_dist = a.distance(*b),
                    [a] => {
                        self.swipe_start_x = a.x;
                        self.swipe_active = true;
                    }
                    _ => {}
                }
                false
            }
            TouchPhase::Move => match sample.touches.as_slice() {
                [a, b] => {
                    let delta = a.distance(*b) - self.pinch_start_dist;
                    if delta > TOUCH_PINCH_THRESHOLD_PX {
                        state.shape_mode = ShapeMode::Expanded;
                        state.set_gesture(Some(GestureKind::TouchExpand))
                    } else if delta < -TOUCH_PINCH_THRESHOLD_PX {
                        state.shape_mode = ShapeMode::Condensed;
                        state.set_gesture(Some(GestureKind::TouchCondense))
                    } else {
                        false
                    }
                }
                [a] if self.swipe_active => {
                    state.params.rotation_speed = (a.x - self.swipe_start_x) * TOUCH_SWIPE_GAIN;
                    state.set_gesture(Some(GestureKind::TouchSpin))
                }
                _ => false,
            },
            TouchPhase::End => {
                self.swipe_active = false;
                if sample.touches.is_empty() {
                    self.settle_deadline = Some(now + TOUCH_SETTLE_SEC);
                }
                false
            }
        }
    }

    /// Return the rotation speed to its default once the settle delay has
    /// passed without a new touch.
    pub fn tick(&mut self, now: f64, state: &mut SharedState) {
        if let Some(deadline) = self.settle_deadline {
            if now >= deadline {
                self.settle_deadline = None;
                if !self.swipe_active {
                    state.reset_rotation_speed();
                }
            }
        }
    }
}
