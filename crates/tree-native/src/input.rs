//! Window input to touch samples.
//!
//! Real touch points are tracked by id; a held left mouse button behaves as a
//! single finger so the swipe gesture works on desktops without a touch
//! screen.

use fnv::FnvHashMap;
use glam::Vec2;
use tree_core::{TouchPhase, TouchSample};
use winit::event::{ElementState, TouchPhase as WinitPhase};

#[derive(Default)]
pub struct TouchInput {
    active: FnvHashMap<u64, Vec2>,
    mouse_down: bool,
    cursor: Vec2,
}

impl TouchInput {
    /// Ordered by id so the pinch pair is stable across events.
    fn points(&self) -> Vec<Vec2> {
        let mut ids: Vec<(&u64, &Vec2)> = self.active.iter().collect();
        ids.sort_by_key(|(id, _)| **id);
        ids.into_iter().map(|(_, p)| *p).collect()
    }

    pub fn touch(&mut self, id: u64, phase: WinitPhase, at: Vec2) -> TouchSample {
        let phase = match phase {
            WinitPhase::Started => {
                self.active.insert(id, at);
                TouchPhase::Start
            }
            WinitPhase::Moved => {
                self.active.insert(id, at);
                TouchPhase::Move
            }
            WinitPhase::Ended | WinitPhase::Cancelled => {
                self.active.remove(&id);
                TouchPhase::End
            }
        };
        TouchSample::new(phase, &self.points())
    }

    pub fn cursor_moved(&mut self, at: Vec2) -> Option<TouchSample> {
        self.cursor = at;
        self.mouse_down
            .then(|| TouchSample::new(TouchPhase::Move, &[at]))
    }

    pub fn left_button(&mut self, state: ElementState) -> Option<TouchSample> {
        match (state, self.mouse_down) {
            (ElementState::Pressed, false) => {
                self.mouse_down = true;
                Some(TouchSample::new(TouchPhase::Start, &[self.cursor]))
            }
            (ElementState::Released, true) => {
                self.mouse_down = false;
                Some(TouchSample::new(TouchPhase::End, &[]))
            }
            _ => None,
        }
    }
}
