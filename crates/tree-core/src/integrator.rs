//! Per-frame particle integration.
//!
//! The integrator owns the [`ParticleField`] and remembers which shape mode
//! it last generated targets for. Each step it:
//!
//! 1. regenerates targets when the state's mode differs from `observed_mode`,
//! 2. eases every position toward its target by `min(1, 2·dt)` of the gap,
//! 3. advances the shared rotation angle by `rotation_speed · dt`.

use crate::constants::*;
use crate::field::ParticleField;
use crate::state::{ShapeMode, SharedState};
use crate::theme::Theme;
use rand::prelude::*;
use std::f32::consts::TAU;

/// What the renderer needs to know after a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    /// Positions moved enough to need a re-upload.
    pub positions_changed: bool,
    /// Targets and colors were regenerated this step.
    pub colors_changed: bool,
    /// The shape mode changed since the previous step.
    pub mode_changed: bool,
    /// Rotation about Y for the particle and overlay groups, radians.
    pub rotation: f32,
    pub overlay_visible: bool,
}

pub struct Integrator {
    field: ParticleField,
    observed_mode: ShapeMode,
    observed_theme: Theme,
    rotation: f32,
    rng: StdRng,
}

impl Integrator {
    pub fn new(state: &SharedState, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::new(
            state.params.particle_count,
            state.shape_mode,
            state.params.theme,
            &mut rng,
        );
        Self {
            field,
            observed_mode: state.shape_mode,
            observed_theme: state.params.theme,
            rotation: 0.0,
            rng,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn observed_mode(&self) -> ShapeMode {
        self.observed_mode
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Replace the field wholesale, e.g. after a particle-count change.
    /// Positions start on their targets.
    pub fn recreate(&mut self, state: &SharedState) {
        self.field = ParticleField::new(
            state.params.particle_count,
            state.shape_mode,
            state.params.theme,
            &mut self.rng,
        );
        self.observed_mode = state.shape_mode;
        self.observed_theme = state.params.theme;
    }

    /// Regenerate targets and colors for the current mode and theme without
    /// moving any particle.
    pub fn regenerate(&mut self, state: &SharedState) {
        self.field
            .regenerate(state.shape_mode, state.params.theme, &mut self.rng);
        self.observed_mode = state.shape_mode;
        self.observed_theme = state.params.theme;
    }

    /// Regenerate when the mode (or theme) moved on since the last call.
    /// Returns `(mode_changed, regenerated)`.
    pub fn sync_mode(&mut self, state: &SharedState) -> (bool, bool) {
        let mode_changed = state.shape_mode != self.observed_mode;
        let theme_changed = state.params.theme != self.observed_theme;
        if mode_changed || theme_changed {
            if mode_changed {
                log::info!(
                    "[field] {} -> {}",
                    self.observed_mode.name(),
                    state.shape_mode.name()
                );
            }
            self.regenerate(state);
        }
        (mode_changed, mode_changed || theme_changed)
    }

    /// Advance one frame by `dt` seconds. Negative or non-finite `dt` is
    /// treated as zero.
    pub fn step(&mut self, state: &SharedState, dt: f32) -> FrameOutput {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let (mode_changed, colors_changed) = self.sync_mode(state);

        let factor = (EASE_RATE * dt).min(1.0);
        let positions_changed = self.field.ease_toward_targets(factor, MOVE_EPSILON);

        self.rotation = (self.rotation + state.params.rotation_speed * dt).rem_euclid(TAU);

        FrameOutput {
            positions_changed,
            colors_changed,
            mode_changed,
            rotation: self.rotation,
            overlay_visible: state.overlay_visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Params;

    fn small_state(count: usize) -> SharedState {
        SharedState::new(Params {
            particle_count: count,
            ..Params::default()
        })
    }

    #[test]
    fn mode_change_regenerates_once() {
        let mut state = small_state(16);
        let mut integrator = Integrator::new(&state, 3);
        state.shape_mode = ShapeMode::Condensed;
        let first = integrator.step(&state, 0.016);
        assert!(first.mode_changed);
        assert!(first.colors_changed);
        assert_eq!(integrator.observed_mode(), ShapeMode::Condensed);
        let second = integrator.step(&state, 0.016);
        assert!(!second.mode_changed);
        assert!(!second.colors_changed);
    }

    #[test]
    fn theme_change_regenerates_without_mode_change() {
        let mut state = small_state(16);
        let mut integrator = Integrator::new(&state, 3);
        state.params.theme = Theme::Frost;
        let out = integrator.step(&state, 0.0);
        assert!(!out.mode_changed);
        assert!(out.colors_changed);
    }

    #[test]
    fn rotation_tracks_speed() {
        let mut state = small_state(4);
        state.params.rotation_speed = 0.5;
        let mut integrator = Integrator::new(&state, 1);
        let out = integrator.step(&state, 1.0);
        assert!((out.rotation - 0.5).abs() < 1e-6);
        state.params.rotation_speed = -1.0;
        let out = integrator.step(&state, 1.0);
        assert!((out.rotation - (TAU - 0.5)).abs() < 1e-5);
    }
}
