//! Bridge to the page's hand-landmark library.
//!
//! The page owns the camera and the detector. It is started through the
//! `startHandTracking` hook and reports each analysis result back through
//! [`submit_hand_landmarks`]. A camera that fails after start is reported
//! through [`report_tracker_failure`].

use std::cell::{Cell, RefCell};
use tree_core::{GestureSender, HandFrame};
use wasm_bindgen::prelude::*;

thread_local! {
    static SENDER: RefCell<Option<GestureSender>> = const { RefCell::new(None) };
    static FAILED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = startHandTracking)]
    fn start_hand_tracking_js() -> Result<(), JsValue>;
}

pub fn install(sender: GestureSender) {
    SENDER.with(|s| *s.borrow_mut() = Some(sender));
}

/// Ask the page to open the camera. An error means there is no tracker and
/// the caller should stay in cruise mode.
pub fn start_hand_tracking() -> Result<(), JsValue> {
    start_hand_tracking_js()
}

/// Called by the page once per analysis result with `hand_count` hands of 21
/// normalized `(x, y)` landmarks, flattened. `hand_count == 0` reports that
/// no hands are in frame, or that the tracker has stopped.
#[wasm_bindgen]
pub fn submit_hand_landmarks(hand_count: u32, coords: &[f32]) {
    send(HandFrame::from_flat(hand_count as usize, coords));
}

/// Called by the page when the camera is refused or its stream ends. The
/// next frame falls back to cruise mode.
#[wasm_bindgen]
pub fn report_tracker_failure() {
    send(HandFrame::empty());
    FAILED.with(|f| f.set(true));
}

/// True once per reported failure.
pub fn take_failure() -> bool {
    FAILED.with(|f| f.replace(false))
}

fn send(frame: HandFrame) {
    SENDER.with(|s| {
        if let Some(sender) = s.borrow().as_ref() {
            sender.send_landmarks(frame);
        }
    });
}
