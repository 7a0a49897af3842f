use glam::Vec3;

// Shared gesture/field tuning constants used by both web and native frontends.

// Parameters
pub const DEFAULT_PARTICLE_COUNT: usize = 20_000;
pub const MOBILE_PARTICLE_COUNT: usize = 5_000; // lighter default for phones
pub const MAX_PARTICLE_COUNT: usize = 200_000; // beyond this the settings layer refuses
pub const DEFAULT_ROTATION_SPEED: f32 = 0.2; // rad/s auto-rotation at rest
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;
pub const MAX_BRIGHTNESS: f32 = 3.0;

// Two-hand channel (normalized landmark space)
pub const HANDS_CLOSE_DIST: f32 = 0.2; // wrists closer than this condense the tree
pub const HANDS_OPEN_DIST: f32 = 0.4; // wrists farther than this expand it

// One-hand channel
pub const PINCH_DIST: f32 = 0.05; // thumb tip to index tip
pub const PALM_SPIN_GAIN: f32 = 5.0; // (cx - 0.5) * gain = rotation speed
pub const PALM_SPIN_CENTER: f32 = 0.5;

// Touch channel (screen pixels)
pub const TOUCH_PINCH_THRESHOLD_PX: f32 = 50.0;
pub const TOUCH_SWIPE_GAIN: f32 = 0.01; // rotation speed per pixel of drag
pub const TOUCH_SETTLE_SEC: f64 = 0.5; // delay before rotation returns to default

// Landmark indices (21-point hand model)
pub const LANDMARK_WRIST: usize = 0;
pub const LANDMARK_THUMB_TIP: usize = 4;
pub const LANDMARK_INDEX_TIP: usize = 8;
pub const LANDMARK_PALM_CENTER: usize = 9; // middle finger MCP
pub const LANDMARKS_PER_HAND: usize = 21;

// EXPANDED: tapered spiral cone
pub const TREE_HALF_HEIGHT: f32 = 10.0;
pub const TREE_BASE_RADIUS: f32 = 8.0;
pub const TREE_TIP_RADIUS: f32 = 0.5;
pub const TREE_SPIRAL_TURNS: f32 = 5.0;
pub const TREE_SPIRAL_TWIST: f32 = 10.0; // extra radians from bottom to top
pub const GOLD_ORNAMENT_CUTOFF: f32 = 0.95;
pub const RED_ORNAMENT_CUTOFF: f32 = 0.90;

// CONDENSED: tight column
pub const COLUMN_RADIUS: f32 = 0.5;

// SUPERPOSITION: spherical shell
pub const SHELL_INNER_RADIUS: f32 = 10.0;
pub const SHELL_OUTER_RADIUS: f32 = 15.0;
pub const SHELL_GOLD_PROBABILITY: f64 = 0.2;

// Palette
pub const GOLD: [f32; 3] = [1.0, 0.84, 0.0];
pub const RED: [f32; 3] = [1.0, 0.2, 0.2];
pub const COLUMN_BLUE: [f32; 3] = [0.2, 0.8, 1.0];
pub const SHELL_PURPLE: [f32; 3] = [0.6, 0.0, 0.8];
pub const SHELL_GOLD: [f32; 3] = [1.0, 0.8, 0.0];
pub const THEME_BLEND: f32 = 0.35; // weight of the theme accent in non-default themes

// Integration
pub const EASE_RATE: f32 = 2.0; // fraction of remaining distance covered per second
pub const MOVE_EPSILON: f32 = 0.01; // below this no re-upload is needed

// Decorative overlay
pub const PHOTO_COUNT: usize = 12;
pub const PHOTO_MIN_RADIUS: f32 = 2.0;
pub const PHOTO_RADIUS_SPAN: f32 = 5.0;
pub const PHOTO_HEIGHT_SPAN: f32 = 15.0;
pub const PHOTO_BOB_AMPLITUDE: f32 = 0.5;
pub const PHOTO_SPRITE_SCALE: f32 = 3.0;

// Background
pub const STAR_COUNT: usize = 2_000;
pub const STAR_MIN_RADIUS: f32 = 50.0;
pub const STAR_RADIUS_SPAN: f32 = 50.0;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 10.0, 30.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 5.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// HUD
pub const FPS_WINDOW_SEC: f64 = 1.0;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}
