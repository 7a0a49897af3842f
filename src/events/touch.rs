use glam::Vec2;
use instant::Instant;
use tree_core::{GestureSender, TouchPhase, TouchSample};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn touch_points(list: &web::TouchList) -> Vec<Vec2> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

fn wire(
    document: &web::Document,
    event: &str,
    phase: TouchPhase,
    sender: GestureSender,
    clock: Instant,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let touches = touch_points(&ev.touches());
        // Two fingers belong to the sculpture, not to page zoom.
        if phase != TouchPhase::End && touches.len() == 2 {
            ev.prevent_default();
        }
        let sample = TouchSample::new(phase, &touches);
        sender.send_touch(sample, clock.elapsed().as_secs_f64());
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Document-level touch listeners feeding the gesture inbox. `clock` must be
/// the frame loop's clock so sample times line up with the tick.
pub fn wire_touch_listeners(document: &web::Document, sender: &GestureSender, clock: Instant) {
    wire(document, "touchstart", TouchPhase::Start, sender.clone(), clock);
    wire(document, "touchmove", TouchPhase::Move, sender.clone(), clock);
    wire(document, "touchend", TouchPhase::End, sender.clone(), clock);
    wire(document, "touchcancel", TouchPhase::End, sender.clone(), clock);
}
