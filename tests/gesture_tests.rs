// Host-side tests for gesture classification through the public core API.

use glam::Vec2;
use tree_core::*;

fn two_hands(left_x: f32, right_x: f32) -> HandFrame {
    let hand = |x: f32| Hand::with_points(Vec2::new(x, 0.5), &[]);
    HandFrame::from_hands([hand(left_x), hand(right_x)])
}

fn one_hand(thumb: Vec2, index: Vec2, palm_x: f32) -> HandFrame {
    HandFrame::from_hands([Hand::with_points(
        Vec2::new(palm_x, 0.7),
        &[
            (LANDMARK_THUMB_TIP, thumb),
            (LANDMARK_INDEX_TIP, index),
            (LANDMARK_PALM_CENTER, Vec2::new(palm_x, 0.6)),
        ],
    )])
}

fn pinch_pair(distance: f32) -> [Vec2; 2] {
    [Vec2::new(100.0, 300.0), Vec2::new(100.0 + distance, 300.0)]
}

#[test]
fn two_hand_dead_zone_keeps_mode() {
    for start in ShapeMode::ALL {
        let mut state = SharedState::default();
        state.shape_mode = start;
        let outcome =
            GestureClassifier::new().classify_landmarks(&two_hands(0.35, 0.65), &mut state);
        assert_eq!(state.shape_mode, start);
        assert!(!outcome.mode_changed);
    }
}

#[test]
fn two_hand_distance_thresholds() {
    let mut classifier = GestureClassifier::new();
    let mut state = SharedState::default();

    classifier.classify_landmarks(&two_hands(0.45, 0.55), &mut state);
    assert_eq!(state.shape_mode, ShapeMode::Condensed);
    assert_eq!(state.last_gesture(), Some(GestureKind::CloseHands));

    let outcome = classifier.classify_landmarks(&two_hands(0.2, 0.8), &mut state);
    assert_eq!(state.shape_mode, ShapeMode::Expanded);
    assert_eq!(state.last_gesture(), Some(GestureKind::OpenHands));
    assert!(outcome.mode_changed && outcome.gesture_changed);
}

#[test]
fn no_hands_resets_speed_and_label() {
    let mut classifier = GestureClassifier::new();
    let mut state = SharedState::default();
    classifier.classify_landmarks(
        &one_hand(Vec2::new(0.6, 0.5), Vec2::new(0.9, 0.2), 0.95),
        &mut state,
    );
    assert!(state.params.rotation_speed > 2.0);

    classifier.classify_landmarks(&HandFrame::empty(), &mut state);
    assert_eq!(state.last_gesture(), None);
    assert_eq!(gesture_label(state.last_gesture()), NO_GESTURE_LABEL);
    assert_eq!(state.params.rotation_speed, DEFAULT_ROTATION_SPEED);
}

#[test]
fn partial_hands_count_as_no_hands() {
    let mut state = SharedState::default();
    state.params.rotation_speed = -1.5;
    let partial = HandFrame::from_flat(1, &[0.5; 10]);
    GestureClassifier::new().classify_landmarks(&partial, &mut state);
    assert_eq!(state.params.rotation_speed, DEFAULT_ROTATION_SPEED);
}

#[test]
fn single_hand_pinch_and_spin() {
    let mut classifier = GestureClassifier::new();
    let mut state = SharedState::default();

    classifier.classify_landmarks(
        &one_hand(Vec2::new(0.50, 0.5), Vec2::new(0.53, 0.5), 0.5),
        &mut state,
    );
    assert_eq!(state.shape_mode, ShapeMode::Superposition);
    assert_eq!(gesture_label(state.last_gesture()), "Quantum Pinch");

    classifier.classify_landmarks(
        &one_hand(Vec2::new(0.3, 0.5), Vec2::new(0.7, 0.5), 0.7),
        &mut state,
    );
    assert_eq!(state.shape_mode, ShapeMode::Superposition);
    assert_eq!(state.last_gesture(), Some(GestureKind::OneHandSpin));
    assert!((state.params.rotation_speed - 1.0).abs() < 1e-5);
}

#[test]
fn touch_pinch_delta_from_start() {
    let cases = [
        (60.0, ShapeMode::Expanded),
        (-60.0, ShapeMode::Condensed),
        (10.0, ShapeMode::Superposition),
    ];
    for (delta, expected) in cases {
        let mut classifier = GestureClassifier::new();
        let mut state = SharedState::default();
        state.shape_mode = ShapeMode::Superposition;
        let start = 200.0;
        let begin = TouchSample::new(TouchPhase::Start, &pinch_pair(start));
        classifier.classify_touch(&begin, 0.0, &mut state);
        classifier.classify_touch(
            &TouchSample::new(TouchPhase::Move, &pinch_pair(start + delta)),
            0.1,
            &mut state,
        );
        assert_eq!(state.shape_mode, expected, "delta {}", delta);
    }
}

#[test]
fn touch_swipe_spins_then_settles() {
    let mut classifier = GestureClassifier::new();
    let mut state = SharedState::default();
    let at = |x: f32| [Vec2::new(x, 400.0)];

    classifier.classify_touch(&TouchSample::new(TouchPhase::Start, &at(100.0)), 0.0, &mut state);
    classifier.classify_touch(&TouchSample::new(TouchPhase::Move, &at(250.0)), 0.1, &mut state);
    assert!((state.params.rotation_speed - 1.5).abs() < 1e-5);
    assert_eq!(state.last_gesture(), Some(GestureKind::TouchSpin));

    classifier.classify_touch(&TouchSample::new(TouchPhase::End, &[]), 0.2, &mut state);
    classifier.tick(0.5, &mut state);
    assert!((state.params.rotation_speed - 1.5).abs() < 1e-5);
    classifier.tick(0.8, &mut state);
    assert_eq!(state.params.rotation_speed, DEFAULT_ROTATION_SPEED);
}

#[test]
fn new_touch_cancels_pending_settle() {
    let mut classifier = GestureClassifier::new();
    let mut state = SharedState::default();
    let at = |x: f32| [Vec2::new(x, 400.0)];

    classifier.classify_touch(&TouchSample::new(TouchPhase::Start, &at(0.0)), 0.0, &mut state);
    classifier.classify_touch(&TouchSample::new(TouchPhase::Move, &at(-100.0)), 0.1, &mut state);
    classifier.classify_touch(&TouchSample::new(TouchPhase::End, &[]), 0.2, &mut state);
    classifier.classify_touch(&TouchSample::new(TouchPhase::Start, &at(50.0)), 0.3, &mut state);
    classifier.tick(1.0, &mut state);
    assert!((state.params.rotation_speed + 1.0).abs() < 1e-5);
}

#[test]
fn malformed_touch_is_ignored() {
    let mut classifier = GestureClassifier::new();
    let mut state = SharedState::default();
    let three = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)];
    let three = TouchSample::new(TouchPhase::Start, &three);
    let outcome = classifier.classify_touch(&three, 0.0, &mut state);
    assert_eq!(outcome, GestureOutcome::default());
    let nan = [Vec2::new(f32::NAN, 0.0)];
    classifier.classify_touch(&TouchSample::new(TouchPhase::Start, &nan), 0.0, &mut state);
    assert_eq!(state.params.rotation_speed, DEFAULT_ROTATION_SPEED);
}

#[test]
fn hand_without_landmarks_is_ignored() {
    let mut state = SharedState::default();
    state.params.rotation_speed = 2.0;
    let bare = HandFrame::from_hands([Hand::new(Vec::new())]);
    let outcome = GestureClassifier::new().classify_landmarks(&bare, &mut state);
    assert_eq!(state.params.rotation_speed, DEFAULT_ROTATION_SPEED);
    assert_eq!(state.shape_mode, SharedState::default().shape_mode);
    assert!(!outcome.mode_changed);
}
