// Host-side tests for the settings layer.

use tree_core::*;

fn setup(count: usize) -> (SharedState, Integrator) {
    let state = SharedState::new(Params {
        particle_count: count,
        ..Params::default()
    });
    let integrator = Integrator::new(&state, 5);
    (state, integrator)
}

#[test]
fn particle_count_recreates_field() {
    let (mut state, mut integrator) = setup(100);
    let applied = apply_setting(&mut state, &mut integrator, Setting::ParticleCount(250)).unwrap();
    assert!(applied.recreated);
    assert_eq!(applied.message, "粒子数: 250");
    assert_eq!(state.params.particle_count, 250);
    assert_eq!(integrator.field().len(), 250);
    assert_eq!(integrator.field().positions(), integrator.field().targets());
}

#[test]
fn out_of_range_values_are_refused() {
    let (mut state, mut integrator) = setup(100);
    let before = state.params.clone();

    let err = apply_setting(&mut state, &mut integrator, Setting::ParticleCount(0)).unwrap_err();
    assert_eq!(
        err,
        SettingsError::ParticleCount {
            requested: 0,
            max: MAX_PARTICLE_COUNT
        }
    );
    assert!(apply_setting(
        &mut state,
        &mut integrator,
        Setting::ParticleCount(MAX_PARTICLE_COUNT + 1)
    )
    .is_err());
    for bad in [-0.1, MAX_BRIGHTNESS + 0.5, f32::NAN] {
        assert!(apply_setting(&mut state, &mut integrator, Setting::Brightness(bad)).is_err());
    }

    assert_eq!(state.params, before);
    assert_eq!(integrator.field().len(), 100);
}

#[test]
fn theme_recolors_without_moving_particles() {
    let (mut state, mut integrator) = setup(64);
    state.shape_mode = ShapeMode::Condensed;
    integrator.step(&state, 0.0);
    let positions = integrator.field().positions().to_vec();

    let applied = apply_setting(&mut state, &mut integrator, Setting::Theme(Theme::Frost)).unwrap();
    assert!(!applied.recreated);
    assert_eq!(integrator.field().positions(), positions.as_slice());
    let expected = Theme::Frost.tint(COLUMN_BLUE);
    assert!(integrator.field().colors().iter().all(|c| *c == expected));

    // Already regenerated, so the next step sees no change.
    let out = integrator.step(&state, 0.0);
    assert!(!out.colors_changed);
}

#[test]
fn reset_restores_default_count() {
    let (mut state, mut integrator) = setup(10);
    let applied = apply_setting(&mut state, &mut integrator, Setting::Reset).unwrap();
    assert_eq!(applied.message, "已恢复默认设置");
    assert_eq!(state.params.particle_count, DEFAULT_PARTICLE_COUNT);
    assert_eq!(integrator.field().len(), DEFAULT_PARTICLE_COUNT);
}

#[test]
fn photos_and_brightness_are_plain_writes() {
    let (mut state, mut integrator) = setup(10);
    apply_setting(&mut state, &mut integrator, Setting::PhotosVisible(false)).unwrap();
    assert!(!state.overlay_visible());
    apply_setting(&mut state, &mut integrator, Setting::Brightness(MAX_BRIGHTNESS)).unwrap();
    assert_eq!(state.params.brightness, MAX_BRIGHTNESS);
    assert_eq!(integrator.field().len(), 10);
}
