//! Particle field storage and the per-mode target generator.
//!
//! A [`ParticleField`] holds three index-aligned arrays: animated `positions`,
//! per-mode `targets`, and `colors`. [`generate_targets`] rewrites the last two
//! in place and never touches positions, so the integrator can animate the
//! transition from the old shape to the new one.

use crate::constants::*;
use crate::state::ShapeMode;
use crate::theme::Theme;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    targets: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
}

impl ParticleField {
    /// Build a field for `mode` with positions snapped onto their targets.
    pub fn new<R: Rng + ?Sized>(count: usize, mode: ShapeMode, theme: Theme, rng: &mut R) -> Self {
        let mut field = Self {
            positions: vec![Vec3::ZERO; count],
            targets: vec![Vec3::ZERO; count],
            colors: vec![[0.0; 3]; count],
        };
        field.regenerate(mode, theme, rng);
        field.snap_to_targets();
        log::info!("[field] created {} particles in {}", count, mode.name());
        field
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Recompute targets and colors for `mode`; positions are left alone.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, mode: ShapeMode, theme: Theme, rng: &mut R) {
        generate_targets(mode, theme, &mut self.targets, &mut self.colors, rng);
    }

    pub fn snap_to_targets(&mut self) {
        self.positions.copy_from_slice(&self.targets);
    }

    /// Move every position component toward its target by `factor` of the
    /// remaining distance. Returns whether any component was farther than
    /// `epsilon` from its target before the move.
    pub fn ease_toward_targets(&mut self, factor: f32, epsilon: f32) -> bool {
        if factor <= 0.0 {
            return false;
        }
        let mut moved = false;
        for (pos, target) in self.positions.iter_mut().zip(&self.targets) {
            let delta = *target - *pos;
            if delta.abs().max_element() > epsilon {
                moved = true;
            }
            *pos += delta * factor;
        }
        moved
    }
}

/// Fill `targets` and `colors` with one independent sample per particle.
/// Both slices must have the same length.
pub fn generate_targets<R: Rng + ?Sized>(
    mode: ShapeMode,
    theme: Theme,
    targets: &mut [Vec3],
    colors: &mut [[f32; 3]],
    rng: &mut R,
) {
    debug_assert_eq!(targets.len(), colors.len());
    for (target, color) in targets.iter_mut().zip(colors.iter_mut()) {
        let (pos, rgb) = match mode {
            ShapeMode::Expanded => sample_tree(rng),
            ShapeMode::Condensed => sample_column(rng),
            ShapeMode::Superposition => sample_shell(rng),
        };
        *target = pos;
        *color = theme.tint(rgb);
    }
}

fn sample_tree<R: Rng + ?Sized>(rng: &mut R) -> (Vec3, [f32; 3]) {
    let h = rng.gen_range(-TREE_HALF_HEIGHT..=TREE_HALF_HEIGHT);
    let t = (h + TREE_HALF_HEIGHT) / (2.0 * TREE_HALF_HEIGHT);
    let max_r = TREE_BASE_RADIUS * (1.0 - t) + TREE_TIP_RADIUS;
    let angle = rng.gen::<f32>() * TAU * TREE_SPIRAL_TURNS + t * TREE_SPIRAL_TWIST;
    let radius = rng.gen::<f32>() * max_r;
    let pos = Vec3::new(angle.cos() * radius, h, angle.sin() * radius);

    let roll = rng.gen::<f32>();
    let rgb = if roll > GOLD_ORNAMENT_CUTOFF {
        GOLD
    } else if roll > RED_ORNAMENT_CUTOFF {
        RED
    } else {
        [0.1, 0.5 + rng.gen::<f32>() * 0.5, 0.2]
    };
    (pos, rgb)
}

fn sample_column<R: Rng + ?Sized>(rng: &mut R) -> (Vec3, [f32; 3]) {
    let h = rng.gen_range(-TREE_HALF_HEIGHT..=TREE_HALF_HEIGHT);
    let angle = rng.gen::<f32>() * TAU;
    let radius = rng.gen::<f32>() * COLUMN_RADIUS;
    let pos = Vec3::new(angle.cos() * radius, h, angle.sin() * radius);
    (pos, COLUMN_BLUE)
}

fn sample_shell<R: Rng + ?Sized>(rng: &mut R) -> (Vec3, [f32; 3]) {
    let dir = unit_sphere(rng);
    let radius = rng.gen_range(SHELL_INNER_RADIUS..=SHELL_OUTER_RADIUS);
    let rgb = if rng.gen_bool(SHELL_GOLD_PROBABILITY) {
        SHELL_GOLD
    } else {
        SHELL_PURPLE
    };
    (dir * radius, rgb)
}

/// Uniform direction on the unit sphere.
#[inline]
pub fn unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_starts_on_targets() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(64, ShapeMode::Condensed, Theme::Aurora, &mut rng);
        assert_eq!(field.positions(), field.targets());
    }

    #[test]
    fn regenerate_leaves_positions() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = ParticleField::new(32, ShapeMode::Expanded, Theme::Aurora, &mut rng);
        let before = field.positions().to_vec();
        field.regenerate(ShapeMode::Superposition, Theme::Aurora, &mut rng);
        assert_eq!(field.positions(), &before[..]);
        assert_ne!(field.targets(), &before[..]);
    }

    #[test]
    fn unit_sphere_is_normalized() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let d = unit_sphere(&mut rng);
            assert!((d.length() - 1.0).abs() < 1e-4);
        }
    }
}
