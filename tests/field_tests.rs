// Host-side tests for per-mode target synthesis.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::*;

const SAMPLES: usize = 20_000;
const TOL: f32 = 1e-3;

fn field(mode: ShapeMode, seed: u64) -> ParticleField {
    ParticleField::new(SAMPLES, mode, Theme::Aurora, &mut StdRng::seed_from_u64(seed))
}

fn horizontal(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

#[test]
fn counts_and_color_range_for_every_mode_and_theme() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in [1, 2, 17, 1000] {
        for mode in ShapeMode::ALL {
            for theme in Theme::ALL {
                let f = ParticleField::new(n, mode, theme, &mut rng);
                assert_eq!(f.len(), n);
                assert_eq!(f.targets().len(), n);
                assert_eq!(f.colors().len(), n);
                for rgb in f.colors() {
                    assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)), "{:?}", rgb);
                }
            }
        }
    }
}

#[test]
fn tree_targets_taper_with_height() {
    for seed in 0..3 {
        for p in field(ShapeMode::Expanded, seed).targets() {
            assert!((-10.0 - TOL..=10.0 + TOL).contains(&p.y), "{:?}", p);
            let t = (p.y + 10.0) / 20.0;
            let max_r = 8.0 * (1.0 - t) + 0.5;
            assert!(horizontal(*p) <= max_r + TOL, "{:?}", p);
        }
    }
}

#[test]
fn tree_palette_is_ornaments_or_green() {
    for rgb in field(ShapeMode::Expanded, 5).colors() {
        let gold = *rgb == [1.0, 0.84, 0.0];
        let red = *rgb == [1.0, 0.2, 0.2];
        let green = rgb[0] == 0.1 && rgb[2] == 0.2 && (0.5..=1.0).contains(&rgb[1]);
        assert!(gold || red || green, "{:?}", rgb);
    }
}

#[test]
fn column_targets_are_narrow() {
    let f = field(ShapeMode::Condensed, 7);
    for (p, rgb) in f.targets().iter().zip(f.colors()) {
        assert!((-10.0 - TOL..=10.0 + TOL).contains(&p.y));
        assert!(horizontal(*p) <= 0.5 + TOL, "{:?}", p);
        assert_eq!(*rgb, [0.2, 0.8, 1.0]);
    }
}

#[test]
fn shell_targets_sit_between_radii() {
    let f = field(ShapeMode::Superposition, 9);
    let mut gold = 0usize;
    for (p, rgb) in f.targets().iter().zip(f.colors()) {
        let r = p.length();
        assert!((10.0 - TOL..=15.0 + TOL).contains(&r), "{}", r);
        if *rgb == [1.0, 0.8, 0.0] {
            gold += 1;
        } else {
            assert_eq!(*rgb, [0.6, 0.0, 0.8]);
        }
    }
    let share = gold as f32 / SAMPLES as f32;
    assert!((0.17..0.23).contains(&share), "gold share {}", share);
}
