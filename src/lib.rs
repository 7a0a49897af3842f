#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{
    gesture_channel, starfield, FpsCounter, GestureClassifier, Integrator, PhotoOverlay,
    SharedState, PHOTO_COUNT, STAR_COUNT,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod overlay;
mod tracker;

pub use tracker::{report_tracker_failure, submit_hand_landmarks};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let mobile = controls::is_mobile_user_agent(&user_agent);
    if mobile {
        log::info!("[app] mobile device, lighter particle field");
    }
    let state = SharedState::new(controls::initial_params(mobile));

    let mut rng = rand::thread_rng();
    let stars = starfield(STAR_COUNT, &mut rng);
    let gpu = frame::init_gpu(&canvas, &stars).await;

    let audio = match audio::CueSynth::new() {
        Ok(a) => Some(a),
        Err(e) => {
            log::warn!("[audio] WebAudio unavailable: {:?}", e);
            None
        }
    };

    let (sender, inbox) = gesture_channel();
    let clock = Instant::now();
    events::wire_touch_listeners(&document, &sender, clock);
    tracker::install(sender);

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        integrator: Integrator::new(&state, rand::random()),
        state,
        classifier: GestureClassifier::new(),
        inbox,
        photos: PhotoOverlay::scatter(PHOTO_COUNT, &mut rng),
        gpu,
        canvas,
        document: document.clone(),
        audio,
        hud: overlay::Hud::default(),
        fps: FpsCounter::default(),
        clock,
        last_frame: 0.0,
        field_dirty: true,
    }));

    events::wire_permission_buttons(&document, &ctx);
    events::wire_settings_drawer(&document, &ctx);

    frame::start_loop(ctx);
    Ok(())
}
