//! Shared sculpture state and camera types.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. A single [`SharedState`]
//! is created at startup and handed by reference to the gesture classifier,
//! the integrator and the settings layer; there is no global instance.

use crate::constants::*;
use crate::theme::Theme;
use glam::{Mat4, Vec3};

/// Discrete configuration that selects the procedural target distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// Tapered spiral cone (the "tree").
    #[default]
    Expanded,
    /// Tight vertical column.
    Condensed,
    /// Spherical shell cloud.
    Superposition,
}

impl ShapeMode {
    pub const ALL: [ShapeMode; 3] = [
        ShapeMode::Expanded,
        ShapeMode::Condensed,
        ShapeMode::Superposition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeMode::Expanded => "EXPANDED",
            ShapeMode::Condensed => "CONDENSED",
            ShapeMode::Superposition => "SUPERPOSITION",
        }
    }
}

/// Whether the camera tracker was enabled by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Cruise,
    Interactive,
}

/// A recognized gesture. The absence of a gesture is `None` at the use site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    OpenHands,
    CloseHands,
    QuantumPinch,
    OneHandSpin,
    TouchExpand,
    TouchCondense,
    TouchSpin,
}

impl GestureKind {
    pub fn label(self) -> &'static str {
        match self {
            GestureKind::OpenHands => "Open Hands",
            GestureKind::CloseHands => "Close Hands",
            GestureKind::QuantumPinch => "Quantum Pinch",
            GestureKind::OneHandSpin => "One Hand Spin",
            GestureKind::TouchExpand => "Touch: Expand",
            GestureKind::TouchCondense => "Touch: Condense",
            GestureKind::TouchSpin => "Touch: Spin",
        }
    }
}

/// Label shown when no gesture is recognized.
pub const NO_GESTURE_LABEL: &str = "none";

/// Label for an optional gesture, falling back to [`NO_GESTURE_LABEL`].
pub fn gesture_label(gesture: Option<GestureKind>) -> &'static str {
    gesture.map(GestureKind::label).unwrap_or(NO_GESTURE_LABEL)
}

/// Continuous parameters edited by gestures and the settings layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub particle_count: usize,
    pub rotation_speed: f32,
    pub brightness: f32,
    pub theme: Theme,
    pub photos_visible: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            brightness: DEFAULT_BRIGHTNESS,
            theme: Theme::default(),
            photos_visible: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SharedState {
    pub shape_mode: ShapeMode,
    pub interaction: InteractionMode,
    pub params: Params,
    last_gesture: Option<GestureKind>,
}

impl SharedState {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn last_gesture(&self) -> Option<GestureKind> {
        self.last_gesture
    }

    /// Record the latest gesture. Returns `true` only when it differs from the
    /// previous one; repeated assignments of the same gesture are silent.
    pub fn set_gesture(&mut self, gesture: Option<GestureKind>) -> bool {
        if self.last_gesture == gesture {
            return false;
        }
        self.last_gesture = gesture;
        log::info!("[gesture] {}", gesture_label(gesture));
        true
    }

    pub fn reset_rotation_speed(&mut self) {
        self.params.rotation_speed = DEFAULT_ROTATION_SPEED;
    }

    /// The decorative photo group is only shown around the expanded tree.
    pub fn overlay_visible(&self) -> bool {
        self.params.photos_visible && self.shape_mode == ShapeMode::Expanded
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking slightly down at the middle of the tree.
    pub fn tree_view(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: camera_target_vec3(),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_gesture_reports_only_changes() {
        let mut state = SharedState::default();
        assert!(state.set_gesture(Some(GestureKind::OpenHands)));
        assert!(!state.set_gesture(Some(GestureKind::OpenHands)));
        assert!(state.set_gesture(None));
        assert!(!state.set_gesture(None));
        assert_eq!(state.last_gesture(), None);
    }

    #[test]
    fn overlay_follows_mode_and_toggle() {
        let mut state = SharedState::default();
        assert!(state.overlay_visible());
        state.shape_mode = ShapeMode::Condensed;
        assert!(!state.overlay_visible());
        state.shape_mode = ShapeMode::Expanded;
        state.params.photos_visible = false;
        assert!(!state.overlay_visible());
    }
}
