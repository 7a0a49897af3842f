// Pure helpers behind the DOM controls, kept free of web-sys so host tests
// can include them.

use crate::constants::{CAMERA_FAILED_TOAST, MOBILE_UA_MARKERS, MUTED_LABEL, UNMUTED_LABEL};
use tree_core::{InteractionMode, Params, Setting, SettingsError, Theme, MOBILE_PARTICLE_COUNT};

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m))
}

/// Starting parameters; phones get a lighter particle field.
pub fn initial_params(mobile: bool) -> Params {
    let mut params = Params::default();
    if mobile {
        params.particle_count = MOBILE_PARTICLE_COUNT;
    }
    params
}

/// `None` when the field does not hold a whole number. Range checks happen
/// when the setting is applied.
pub fn particle_setting(raw: &str) -> Option<Setting> {
    raw.trim().parse::<usize>().ok().map(Setting::ParticleCount)
}

pub fn brightness_setting(raw: &str) -> Option<Setting> {
    raw.trim().parse::<f32>().ok().map(Setting::Brightness)
}

pub fn theme_setting(raw: &str) -> Result<Setting, SettingsError> {
    raw.parse::<Theme>().map(Setting::Theme)
}

pub fn mute_label(muted: bool) -> &'static str {
    if muted {
        MUTED_LABEL
    } else {
        UNMUTED_LABEL
    }
}

/// Toast for a camera that died after the user allowed it. `None` when the
/// session is already cruising.
pub fn tracker_failure_toast(mode: InteractionMode) -> Option<&'static str> {
    match mode {
        InteractionMode::Interactive => Some(CAMERA_FAILED_TOAST),
        InteractionMode::Cruise => None,
    }
}
