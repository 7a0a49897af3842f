/// Element ids the page is expected to provide.
///
/// Missing optional elements are skipped; only the canvas is required.
pub const CANVAS_ID: &str = "app-canvas";

// Permission overlay
pub const PERMISSION_OVERLAY_ID: &str = "overlay-permission";
pub const ALLOW_CAMERA_ID: &str = "btn-allow-cam";
pub const DENY_CAMERA_ID: &str = "btn-deny-cam";

// Settings drawer
pub const SETTINGS_DRAWER_ID: &str = "drawer-settings";
pub const SETTINGS_OPEN_ID: &str = "btn-settings";
pub const SETTINGS_CLOSE_ID: &str = "btn-close-settings";
pub const SET_THEME_ID: &str = "set-theme";
pub const SET_PARTICLES_ID: &str = "set-particles";
pub const SET_BRIGHTNESS_ID: &str = "set-brightness";
pub const SET_HUD_ID: &str = "set-hud";
pub const SET_PHOTOS_ID: &str = "set-photos";
pub const RESET_ID: &str = "btn-reset";
pub const MUTE_ID: &str = "btn-mute";

// HUD
pub const HUD_PANEL_ID: &str = "top-right";
pub const HUD_MODE_ID: &str = "status-mode";
pub const HUD_GESTURE_ID: &str = "status-gesture";
pub const HUD_FPS_ID: &str = "status-fps";
pub const TOAST_CONTAINER_ID: &str = "toast-container";

// CSS classes toggled by the front-end
pub const HIDDEN_CLASS: &str = "hidden";
pub const OPEN_CLASS: &str = "open";
pub const TOAST_CLASS: &str = "toast";

pub const TOAST_DURATION_MS: i32 = 3_000;

// Toast texts
pub const CRUISE_TOAST: &str = "已进入自动巡航模式";
pub const CAMERA_FAILED_TOAST: &str = "摄像头不可用, 已进入自动巡航模式";

// Mute button labels
pub const MUTED_LABEL: &str = "🔇";
pub const UNMUTED_LABEL: &str = "🔊";

/// Lower-case user-agent fragments that mark a phone or tablet.
pub const MOBILE_UA_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];
