//! # tree-core
//!
//! Platform-independent engine behind the gesture-driven particle tree:
//!
//! * [`state`]: the shared state handle (shape mode, gesture, parameters).
//! * [`gesture`], [`touch`], [`landmarks`], [`inbox`]: input classification.
//! * [`field`]: per-mode target synthesis.
//! * [`integrator`]: per-frame easing and rotation.
//!
//! Front-ends own a [`SharedState`], a [`GestureInbox`] and an [`Integrator`],
//! drain the inbox at the top of every frame, step the integrator, and hand
//! the resulting field to a renderer.

pub mod audio;
pub mod constants;
pub mod error;
pub mod field;
pub mod gesture;
pub mod hud;
pub mod inbox;
pub mod integrator;
pub mod landmarks;
pub mod overlay;
#[cfg(feature = "render")]
pub mod render;
pub mod settings;
pub mod state;
pub mod theme;
pub mod touch;

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use audio::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use gesture::*;
pub use hud::*;
pub use inbox::*;
pub use integrator::*;
pub use landmarks::*;
pub use overlay::*;
pub use settings::*;
pub use state::*;
pub use theme::*;
pub use touch::*;
