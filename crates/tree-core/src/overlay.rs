use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One decorative photo sprite floating inside the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSprite {
    pub base: Vec3,
    pub phase: f32,
    pub speed: f32,
}

/// The decorative photo group. Texture loading is up to the front-end; this
/// only lays sprites out and animates their gentle bobbing.
#[derive(Clone, Debug, Default)]
pub struct PhotoOverlay {
    sprites: Vec<PhotoSprite>,
}

impl PhotoOverlay {
    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let sprites = (0..count)
            .map(|_| {
                let angle = rng.gen::<f32>() * TAU;
                let radius = PHOTO_MIN_RADIUS + rng.gen::<f32>() * PHOTO_RADIUS_SPAN;
                let h = (rng.gen::<f32>() - 0.5) * PHOTO_HEIGHT_SPAN;
                PhotoSprite {
                    base: Vec3::new(angle.cos() * radius, h, angle.sin() * radius),
                    phase: rng.gen::<f32>() * TAU,
                    speed: 0.5 + rng.gen::<f32>() * 0.5,
                }
            })
            .collect();
        Self { sprites }
    }

    pub fn sprites(&self) -> &[PhotoSprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Sprite positions at `time` seconds, before group rotation.
    pub fn sprite_positions(&self, time: f32) -> impl Iterator<Item = Vec3> + '_ {
        self.sprites.iter().map(move |s| {
            s.base + Vec3::Y * (time * s.speed + s.phase).sin() * PHOTO_BOB_AMPLITUDE
        })
    }
}

/// Static background shell of white stars.
pub fn starfield<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let r = STAR_MIN_RADIUS + rng.gen::<f32>() * STAR_RADIUS_SPAN;
            crate::field::unit_sphere(rng) * r
        })
        .collect()
}
