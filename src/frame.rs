use crate::audio::CueSynth;
use crate::controls::tracker_failure_toast;
use crate::overlay::{self, Hud};
use crate::tracker;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{
    apply_setting, AudioCue, FpsCounter, GestureClassifier, GestureInbox, HudSnapshot,
    InteractionMode, Integrator, PhotoOverlay, PointRenderer, Setting, SettingApplied,
    SettingsError, SharedState,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: SharedState,
    pub classifier: GestureClassifier,
    pub inbox: GestureInbox,
    pub integrator: Integrator,
    pub photos: PhotoOverlay,
    pub gpu: Option<PointRenderer<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub audio: Option<CueSynth>,
    pub hud: Hud,
    pub fps: FpsCounter,
    pub clock: Instant,
    pub last_frame: f64,
    pub field_dirty: bool,
}

impl FrameContext {
    /// Settings from the drawer; any accepted change forces a re-upload.
    pub fn apply(&mut self, setting: Setting) -> Result<SettingApplied, SettingsError> {
        let applied = apply_setting(&mut self.state, &mut self.integrator, setting)?;
        self.field_dirty = true;
        Ok(applied)
    }

    pub fn set_interaction(&mut self, mode: InteractionMode) {
        if self.state.interaction != mode {
            log::info!("[app] interaction {:?} -> {:?}", self.state.interaction, mode);
            self.state.interaction = mode;
        }
    }

    pub fn frame(&mut self) {
        let now = self.clock.elapsed().as_secs_f64();
        let dt = (now - self.last_frame) as f32;
        self.last_frame = now;

        if tracker::take_failure() {
            if let Some(message) = tracker_failure_toast(self.state.interaction) {
                log::warn!("[tracker] camera stopped, falling back to cruise");
                self.set_interaction(InteractionMode::Cruise);
                overlay::show_toast(&self.document, message);
            }
        }

        let outcome = self.inbox.drain(&mut self.classifier, &mut self.state, now);
        let out = self.integrator.step(&self.state, dt);

        if let Some(audio) = &self.audio {
            if let Some(cue) = AudioCue::for_frame(outcome.gesture_changed, out.mode_changed) {
                audio.play(cue);
            }
        }

        self.fps.frame(now);
        self.hud.update(
            &self.document,
            HudSnapshot::capture(&self.state, self.fps.fps()),
        );

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if out.positions_changed || out.colors_changed || self.field_dirty {
                g.upload_particles(self.integrator.field());
                self.field_dirty = false;
            }
            g.upload_sprites(self.photos.sprite_positions(now as f32), out.overlay_visible);
            if let Err(e) = g.render(out.rotation, self.state.params.brightness) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    stars: &[glam::Vec3],
) -> Option<PointRenderer<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match PointRenderer::new(target, canvas.width(), canvas.height(), stars).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
