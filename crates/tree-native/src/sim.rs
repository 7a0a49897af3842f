//! Keyboard-driven stand-in for a camera hand tracker.
//!
//! The window's key handler edits a shared [`SimPose`]; the tracker task polls
//! it and turns it into landmark frames exactly as a real tracker would.

use crate::constants::*;
use glam::Vec2;
use std::sync::{Arc, Mutex};
use tree_core::{
    Hand, HandFrame, LandmarkSource, TrackerError, LANDMARK_INDEX_TIP, LANDMARK_PALM_CENTER,
    LANDMARK_THUMB_TIP, LANDMARK_WRIST,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimPose {
    /// Hands out of frame.
    Absent,
    OpenHands,
    CloseHands,
    Pinch,
    /// One open hand with the palm at normalized x.
    Spin(f32),
}

pub type SharedPose = Arc<Mutex<SimPose>>;

pub struct SimulatedTracker {
    pose: SharedPose,
}

impl SimulatedTracker {
    pub fn new(pose: SharedPose) -> Self {
        Self { pose }
    }
}

fn hand_at(wrist: Vec2) -> Hand {
    Hand::with_points(wrist, &[(LANDMARK_WRIST, wrist)])
}

/// Landmarks for a pose; a single open hand keeps thumb and index apart.
pub fn frame_for(pose: SimPose) -> HandFrame {
    match pose {
        SimPose::Absent => HandFrame::empty(),
        SimPose::OpenHands => {
            HandFrame::from_hands(SIM_OPEN_WRISTS.map(|w| hand_at(Vec2::from(w))))
        }
        SimPose::CloseHands => {
            HandFrame::from_hands(SIM_CLOSED_WRISTS.map(|w| hand_at(Vec2::from(w))))
        }
        SimPose::Pinch => HandFrame::from_hands([Hand::with_points(
            Vec2::new(0.5, 0.7),
            &[
                (LANDMARK_THUMB_TIP, Vec2::new(0.50, 0.50)),
                (LANDMARK_INDEX_TIP, Vec2::new(0.52, 0.50)),
                (LANDMARK_PALM_CENTER, Vec2::new(0.5, 0.6)),
            ],
        )]),
        SimPose::Spin(cx) => HandFrame::from_hands([Hand::with_points(
            Vec2::new(cx, 0.7),
            &[
                (LANDMARK_THUMB_TIP, Vec2::new(cx - 0.15, 0.55)),
                (LANDMARK_INDEX_TIP, Vec2::new(cx + 0.05, 0.35)),
                (LANDMARK_PALM_CENTER, Vec2::new(cx, 0.6)),
            ],
        )]),
    }
}

impl LandmarkSource for SimulatedTracker {
    fn poll(&mut self) -> Result<Option<HandFrame>, TrackerError> {
        let pose = *self.pose.lock().map_err(|_| TrackerError::Closed)?;
        Ok(Some(frame_for(pose)))
    }
}

/// Nudge the simulated palm left or right, starting from center.
pub fn nudge_spin(pose: SimPose, step: f32) -> SimPose {
    let cx = match pose {
        SimPose::Spin(cx) => cx,
        _ => 0.5,
    };
    SimPose::Spin((cx + step).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_core::{GestureClassifier, GestureKind, ShapeMode, SharedState};

    fn classify(pose: SimPose) -> SharedState {
        let mut state = SharedState::default();
        GestureClassifier::new().classify_landmarks(&frame_for(pose), &mut state);
        state
    }

    #[test]
    fn poses_map_to_expected_gestures() {
        assert_eq!(classify(SimPose::CloseHands).shape_mode, ShapeMode::Condensed);
        assert_eq!(classify(SimPose::Pinch).shape_mode, ShapeMode::Superposition);
        let open = classify(SimPose::OpenHands);
        assert_eq!(open.last_gesture(), Some(GestureKind::OpenHands));
        let spin = classify(SimPose::Spin(0.9));
        assert!((spin.params.rotation_speed - 2.0).abs() < 1e-5);
    }

    #[test]
    fn nudge_clamps_to_frame() {
        let mut pose = SimPose::Absent;
        for _ in 0..20 {
            pose = nudge_spin(pose, SIM_SPIN_STEP);
        }
        assert_eq!(pose, SimPose::Spin(1.0));
    }
}
