use crate::constants::*;
use crate::dom;
use tree_core::HudSnapshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide_permission(document: &web::Document) {
    dom::set_class(document, PERMISSION_OVERLAY_ID, HIDDEN_CLASS, true);
}

#[inline]
pub fn set_drawer_open(document: &web::Document, open: bool) {
    dom::set_class(document, SETTINGS_DRAWER_ID, OPEN_CLASS, open);
}

#[inline]
pub fn set_hud_visible(document: &web::Document, visible: bool) {
    dom::set_visible(document, HUD_PANEL_ID, visible);
}

/// Writes HUD text only when it differs from what is on screen.
#[derive(Default)]
pub struct Hud {
    shown: Option<HudSnapshot>,
}

impl Hud {
    pub fn update(&mut self, document: &web::Document, snapshot: HudSnapshot) {
        let prev = self.shown.as_ref();
        if prev.map(|p| &p.mode) != Some(&snapshot.mode) {
            dom::set_text(document, HUD_MODE_ID, &snapshot.mode);
        }
        if prev.map(|p| &p.gesture) != Some(&snapshot.gesture) {
            dom::set_text(document, HUD_GESTURE_ID, &snapshot.gesture);
        }
        if prev.map(|p| &p.fps) != Some(&snapshot.fps) {
            dom::set_text(document, HUD_FPS_ID, &snapshot.fps);
        }
        self.shown = Some(snapshot);
    }
}

/// Append a toast that removes itself after [`TOAST_DURATION_MS`].
pub fn show_toast(document: &web::Document, message: &str) {
    let Some(container) = document.get_element_by_id(TOAST_CONTAINER_ID) else {
        log::info!("[toast] {}", message);
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(TOAST_CLASS);
    toast.set_text_content(Some(message));
    if container.append_child(&toast).is_err() {
        return;
    }
    let remove = Closure::once_into_js(move || toast.remove());
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            TOAST_DURATION_MS,
        );
    }
}
