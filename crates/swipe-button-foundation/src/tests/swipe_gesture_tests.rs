use super::*;

fn tracker(max_travel: f32, threshold: f32) -> SwipeGesture {
    SwipeGesture::new(GestureConfig::new(threshold)).with_bounds(TravelBounds::measured(max_travel))
}

#[test]
fn press_off_handle_is_ignored() {
    let mut gesture = tracker(100.0, 150.0);
    assert_eq!(
        gesture.handle(SwipeInput::Press {
            x: 10.0,
            on_handle: false
        }),
        SwipeOutcome::Ignored
    );
    assert!(!gesture.is_active());
    assert_eq!(gesture.state().origin_x(), None);
}

#[test]
fn moves_and_releases_while_idle_are_ignored() {
    let mut gesture = tracker(100.0, 150.0);
    assert_eq!(gesture.drag_to(50.0), SwipeOutcome::Ignored);
    assert_eq!(gesture.release(500.0), SwipeOutcome::Ignored);
    assert_eq!(gesture.state(), GestureState::default());
}

#[test]
fn offset_stays_within_track_for_any_displacement() {
    let mut gesture = tracker(180.0, 1_000.0);
    assert!(gesture.press(500.0, true));

    // Deterministic pseudo-random walk over large positive and negative
    // displacements; stays below the end so the gesture remains active.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let delta = (seed >> 8) as f32 / (1 << 24) as f32 * 4_000.0 - 2_000.0;
        let x = 500.0 + delta.min(179.0);
        match gesture.drag_to(x) {
            SwipeOutcome::Dragged { offset } => {
                assert!((0.0..=180.0).contains(&offset), "offset {offset} out of range");
                assert_eq!(offset, gesture.offset());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    assert!(gesture.is_active());
}

#[test]
fn drag_to_end_fires_even_below_release_threshold() {
    let mut gesture = tracker(100.0, 150.0);
    gesture.press(0.0, true);

    let outcome = gesture.drag_to(100.0);
    assert_eq!(
        outcome,
        SwipeOutcome::Goal(GoalReached {
            trigger: GoalTrigger::DragToEnd,
            displacement: 100.0,
        })
    );
    assert!(!gesture.is_active());
    assert_eq!(gesture.offset(), 0.0);
}

#[test]
fn overshooting_move_saturates_and_completes() {
    let mut gesture = tracker(100.0, 150.0);
    gesture.press(20.0, true);
    let goal = gesture.drag_to(400.0).goal().expect("goal reached");
    assert_eq!(goal.trigger, GoalTrigger::DragToEnd);
    assert_eq!(goal.displacement, 380.0);
}

#[test]
fn release_threshold_uses_raw_displacement() {
    let mut gesture = tracker(50.0, 60.0);
    gesture.press(0.0, true);
    assert_eq!(gesture.drag_to(40.0), SwipeOutcome::Dragged { offset: 40.0 });

    let outcome = gesture.release(65.0);
    assert_eq!(
        outcome,
        SwipeOutcome::Goal(GoalReached {
            trigger: GoalTrigger::Release,
            displacement: 65.0,
        })
    );
}

#[test]
fn release_short_of_threshold_abandons() {
    let mut gesture = tracker(300.0, 150.0);
    gesture.press(10.0, true);
    gesture.drag_to(120.0);

    assert_eq!(gesture.release(159.0), SwipeOutcome::Abandoned);
    assert_eq!(gesture.state(), GestureState::default());
}

#[test]
fn release_exactly_at_threshold_counts() {
    let mut gesture = tracker(300.0, 150.0);
    gesture.press(0.0, true);
    assert!(gesture.release(150.0).goal().is_some());
}

#[test]
fn at_most_one_goal_per_gesture() {
    let mut gesture = tracker(100.0, 50.0);
    gesture.press(0.0, true);

    let outcomes = [
        gesture.drag_to(30.0),
        gesture.drag_to(120.0),
        gesture.drag_to(130.0),
        gesture.release(200.0),
    ];
    let goals = outcomes.iter().filter(|o| o.goal().is_some()).count();
    assert_eq!(goals, 1);
    assert_eq!(outcomes[3], SwipeOutcome::Ignored);
}

#[test]
fn second_press_while_dragging_keeps_origin() {
    let mut gesture = tracker(100.0, 150.0);
    gesture.press(25.0, true);
    gesture.drag_to(60.0);

    assert!(!gesture.press(80.0, true));
    assert_eq!(gesture.state().origin_x(), Some(25.0));
    assert_eq!(gesture.offset(), 35.0);
}

#[test]
fn tracker_is_reusable_after_each_gesture() {
    let mut gesture = tracker(100.0, 150.0);

    gesture.press(0.0, true);
    gesture.release(10.0);
    assert_eq!(gesture.state(), GestureState::default());

    gesture.press(0.0, true);
    gesture.drag_to(100.0);
    assert_eq!(gesture.state(), GestureState::default());

    assert_eq!(gesture.handle(SwipeInput::Press { x: 5.0, on_handle: true }), SwipeOutcome::Started);
    assert_eq!(gesture.state().origin_x(), Some(5.0));
}

#[test]
fn unmeasured_track_never_completes_by_drag() {
    let mut gesture = SwipeGesture::new(GestureConfig::default());
    gesture.press(0.0, true);
    assert_eq!(gesture.drag_to(10_000.0), SwipeOutcome::Dragged { offset: 0.0 });
    assert!(gesture.is_active());

    assert!(gesture.release(10_000.0).goal().is_some());
}

#[test]
fn cancel_abandons_without_goal() {
    let mut gesture = tracker(100.0, 10.0);
    assert!(!gesture.cancel());
    gesture.press(0.0, true);
    gesture.drag_to(50.0);
    assert!(gesture.cancel());
    assert_eq!(gesture.state(), GestureState::default());
}

#[test]
fn shrinking_bounds_reclamps_offset_mid_drag() {
    let mut gesture = tracker(200.0, 150.0);
    gesture.press(0.0, true);
    gesture.drag_to(150.0);

    gesture.set_bounds(TravelBounds::measured(120.0));
    assert_eq!(gesture.offset(), 120.0);
    assert!(gesture.is_active());

    assert!(gesture.drag_to(121.0).goal().is_some());
}
