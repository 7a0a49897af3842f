use crate::constants::*;
use crate::controls::{brightness_setting, mute_label, particle_setting, theme_setting};
use crate::dom;
use crate::frame::FrameContext;
use crate::overlay;
use crate::tracker;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{InteractionMode, Setting, SettingApplied, SettingsError};
use web_sys as web;

type Ctx = Rc<RefCell<FrameContext>>;

fn resume_audio(ctx: &Ctx) {
    if let Some(audio) = &ctx.borrow().audio {
        audio.resume();
    }
}

/// Allow starts the page's tracker; deny (or a tracker that cannot start)
/// leaves the sculpture cruising.
pub fn wire_permission_buttons(document: &web::Document, ctx: &Ctx) {
    let allow_ctx = ctx.clone();
    let allow_doc = document.clone();
    dom::add_click_listener(document, ALLOW_CAMERA_ID, move || {
        overlay::hide_permission(&allow_doc);
        resume_audio(&allow_ctx);
        match tracker::start_hand_tracking() {
            Ok(()) => allow_ctx
                .borrow_mut()
                .set_interaction(InteractionMode::Interactive),
            Err(e) => {
                log::warn!("[tracker] start failed: {:?}", e);
                overlay::show_toast(&allow_doc, CAMERA_FAILED_TOAST);
            }
        }
    });

    let deny_ctx = ctx.clone();
    let deny_doc = document.clone();
    dom::add_click_listener(document, DENY_CAMERA_ID, move || {
        overlay::hide_permission(&deny_doc);
        resume_audio(&deny_ctx);
        deny_ctx
            .borrow_mut()
            .set_interaction(InteractionMode::Cruise);
        overlay::show_toast(&deny_doc, CRUISE_TOAST);
    });
}

fn apply(ctx: &Ctx, setting: Setting) -> Result<SettingApplied, SettingsError> {
    let result = ctx.borrow_mut().apply(setting);
    if let Err(e) = &result {
        log::warn!("[settings] rejected: {}", e);
    }
    result
}

fn apply_with_toast(document: &web::Document, ctx: &Ctx, setting: Setting) {
    match apply(ctx, setting) {
        Ok(applied) => overlay::show_toast(document, &applied.message),
        Err(e) => overlay::show_toast(document, &e.to_string()),
    }
}

pub fn wire_settings_drawer(document: &web::Document, ctx: &Ctx) {
    {
        let frame = ctx.borrow();
        let params = &frame.state.params;
        dom::set_control_value(document, SET_PARTICLES_ID, &params.particle_count.to_string());
        dom::set_control_value(document, SET_BRIGHTNESS_ID, &params.brightness.to_string());
    }

    let doc = document.clone();
    dom::add_click_listener(document, SETTINGS_OPEN_ID, move || {
        overlay::set_drawer_open(&doc, true)
    });
    let doc = document.clone();
    dom::add_click_listener(document, SETTINGS_CLOSE_ID, move || {
        overlay::set_drawer_open(&doc, false)
    });

    let (doc, c) = (document.clone(), ctx.clone());
    dom::add_value_listener(document, SET_THEME_ID, "change", move |value| {
        match theme_setting(&value) {
            Ok(setting) => apply_with_toast(&doc, &c, setting),
            Err(e) => log::warn!("[settings] {}", e),
        }
    });

    let (doc, c) = (document.clone(), ctx.clone());
    dom::add_value_listener(document, SET_PARTICLES_ID, "change", move |value| {
        let accepted = particle_setting(&value).map(|s| apply(&c, s));
        match accepted {
            Some(Ok(applied)) => overlay::show_toast(&doc, &applied.message),
            _ => {
                let current = c.borrow().state.params.particle_count;
                dom::set_control_value(&doc, SET_PARTICLES_ID, &current.to_string());
            }
        }
    });

    let c = ctx.clone();
    dom::add_value_listener(document, SET_BRIGHTNESS_ID, "input", move |value| {
        if let Some(setting) = brightness_setting(&value) {
            _ = apply(&c, setting);
        }
    });

    let doc = document.clone();
    dom::add_checkbox_listener(document, SET_HUD_ID, move |on| {
        overlay::set_hud_visible(&doc, on)
    });

    let c = ctx.clone();
    dom::add_checkbox_listener(document, SET_PHOTOS_ID, move |on| {
        _ = apply(&c, Setting::PhotosVisible(on));
    });

    let (doc, c) = (document.clone(), ctx.clone());
    dom::add_click_listener(document, RESET_ID, move || {
        apply_with_toast(&doc, &c, Setting::Reset);
        let frame = c.borrow();
        let params = &frame.state.params;
        dom::set_control_value(&doc, SET_PARTICLES_ID, &params.particle_count.to_string());
        dom::set_control_value(&doc, SET_BRIGHTNESS_ID, &params.brightness.to_string());
    });

    let (doc, c) = (document.clone(), ctx.clone());
    dom::add_click_listener(document, MUTE_ID, move || {
        if let Some(audio) = c.borrow_mut().audio.as_mut() {
            let muted = audio.toggle_mute();
            dom::set_text(&doc, MUTE_ID, mute_label(muted));
        }
    });
}
