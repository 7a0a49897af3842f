// Host-side tests for per-frame integration.

use tree_core::*;

fn state(count: usize) -> SharedState {
    SharedState::new(Params {
        particle_count: count,
        ..Params::default()
    })
}

fn max_error(field: &ParticleField) -> f32 {
    field
        .positions()
        .iter()
        .zip(field.targets())
        .map(|(p, t)| p.distance(*t))
        .fold(0.0, f32::max)
}

#[test]
fn zero_dt_leaves_positions() {
    let mut s = state(256);
    let mut integrator = Integrator::new(&s, 42);
    s.shape_mode = ShapeMode::Superposition;
    let before = integrator.field().positions().to_vec();
    let out = integrator.step(&s, 0.0);
    assert!(out.mode_changed);
    assert!(!out.positions_changed);
    assert_eq!(integrator.field().positions(), before.as_slice());

    let again = integrator.step(&s, 0.0);
    assert!(!again.mode_changed);
    assert_eq!(integrator.field().positions(), before.as_slice());
}

#[test]
fn error_decays_geometrically() {
    let mut s = state(512);
    let mut integrator = Integrator::new(&s, 7);
    s.shape_mode = ShapeMode::Condensed;
    integrator.step(&s, 0.0);
    let e0 = max_error(integrator.field());
    assert!(e0 > 1.0);

    let dt = 0.1;
    let keep = 1.0 - (2.0f32 * dt).min(1.0);
    for k in 1..=60 {
        integrator.step(&s, dt);
        let bound = e0 * keep.powi(k);
        let err = max_error(integrator.field());
        assert!(err <= bound * 1.001 + 1e-4, "step {}: {} > {}", k, err, bound);
    }
    assert!(max_error(integrator.field()) < 1e-3);
    assert!(!integrator.step(&s, dt).positions_changed);
}

#[test]
fn large_dt_snaps_in_one_step() {
    let mut s = state(64);
    let mut integrator = Integrator::new(&s, 1);
    s.shape_mode = ShapeMode::Superposition;
    let out = integrator.step(&s, 0.75);
    assert!(out.positions_changed);
    assert!(max_error(integrator.field()) < 1e-4);
    let settled = integrator.step(&s, 0.016);
    assert!(!settled.positions_changed);
}

#[test]
fn regeneration_only_on_transition() {
    let mut s = state(32);
    let mut integrator = Integrator::new(&s, 3);
    let targets = integrator.field().targets().to_vec();
    for _ in 0..5 {
        integrator.step(&s, 0.016);
    }
    assert_eq!(integrator.field().targets(), targets.as_slice());

    s.shape_mode = ShapeMode::Condensed;
    let out = integrator.step(&s, 0.016);
    assert!(out.mode_changed && out.colors_changed);
    assert_ne!(integrator.field().targets(), targets.as_slice());
}

#[test]
fn bad_dt_is_treated_as_zero() {
    let mut s = state(16);
    let mut integrator = Integrator::new(&s, 9);
    s.shape_mode = ShapeMode::Condensed;
    integrator.step(&s, 0.0);
    let before = integrator.field().positions().to_vec();
    for dt in [-1.0, f32::NAN, f32::INFINITY] {
        let out = integrator.step(&s, dt);
        assert!(!out.positions_changed);
        assert_eq!(out.rotation, 0.0);
    }
    assert_eq!(integrator.field().positions(), before.as_slice());
}

#[test]
fn overlay_follows_mode_and_setting() {
    let mut s = state(8);
    let mut integrator = Integrator::new(&s, 2);
    assert!(integrator.step(&s, 0.016).overlay_visible);
    s.shape_mode = ShapeMode::Condensed;
    assert!(!integrator.step(&s, 0.016).overlay_visible);
    s.shape_mode = ShapeMode::Expanded;
    s.params.photos_visible = false;
    assert!(!integrator.step(&s, 0.016).overlay_visible);
}
