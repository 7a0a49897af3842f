// Native front-end tuning.

pub const WINDOW_TITLE: &str = "Quantum Tree (native)";

// Simulated tracker
pub const TRACKER_PERIOD_MS: u64 = 33; // roughly camera frame rate
pub const SIM_OPEN_WRISTS: [[f32; 2]; 2] = [[0.2, 0.6], [0.8, 0.6]]; // 0.6 apart
pub const SIM_CLOSED_WRISTS: [[f32; 2]; 2] = [[0.45, 0.6], [0.55, 0.6]]; // 0.1 apart
pub const SIM_SPIN_STEP: f32 = 0.1; // palm x change per arrow key press

// Settings keys
pub const BRIGHTNESS_STEP: f32 = 0.1;

// HUD
pub const TITLE_REFRESH_SEC: f64 = 0.5;
