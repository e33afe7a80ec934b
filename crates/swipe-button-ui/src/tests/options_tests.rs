use super::*;

fn markup() -> HostMarkup {
    HostMarkup {
        href: Some("https://example.com/unsubscribe".into()),
        label: "  Unsubscribe  ".into(),
        note: Some("Swipe to confirm".into()),
        extra_class: Some("btn-swipe--danger".into()),
        threshold: Some("200".into()),
        metrika_id: Some("12345".into()),
        metrika_event: Some("unsubscribe".into()),
    }
}

#[test]
fn full_markup_is_carried_over() {
    let options = SwipeButtonOptions::from_markup(&markup()).expect("valid markup");
    assert_eq!(options.target_url.as_deref(), Some("https://example.com/unsubscribe"));
    assert_eq!(options.label, "Unsubscribe");
    assert_eq!(options.note.as_deref(), Some("Swipe to confirm"));
    assert_eq!(options.extra_class.as_deref(), Some("btn-swipe--danger"));
    assert_eq!(options.release_threshold, 200.0);
    assert_eq!(options.metrika_id.as_deref(), Some("12345"));
    assert_eq!(options.metrika_goal.as_deref(), Some("unsubscribe"));
    assert_eq!(options.goal_delay, GOAL_DEBOUNCE_DELAY);
    assert_eq!(options.gesture_config().release_threshold, 200.0);
}

#[test]
fn empty_attributes_count_as_absent() {
    let markup = HostMarkup {
        href: Some(String::new()),
        threshold: Some(" ".into()),
        metrika_id: Some(String::new()),
        ..HostMarkup::default()
    };
    let options = SwipeButtonOptions::from_markup(&markup).expect("valid markup");
    assert_eq!(options.target_url, None);
    assert_eq!(options.metrika_id, None);
    assert_eq!(options.release_threshold, DEFAULT_RELEASE_THRESHOLD);
}

#[test]
fn fractional_threshold_is_accepted() {
    assert_eq!(parse_threshold(Some("87.5")), Ok(87.5));
}

#[test]
fn malformed_threshold_is_rejected() {
    let markup = HostMarkup {
        threshold: Some("wide".into()),
        ..HostMarkup::default()
    };
    let err = SwipeButtonOptions::from_markup(&markup).unwrap_err();
    assert_eq!(
        err,
        OptionsError::InvalidThreshold {
            value: "wide".into()
        }
    );
    assert_eq!(err.to_string(), "threshold \"wide\" is not a number");
}

#[test]
fn negative_or_infinite_threshold_is_rejected() {
    assert!(matches!(
        parse_threshold(Some("-10")),
        Err(OptionsError::NegativeThreshold { .. })
    ));
    assert!(matches!(
        parse_threshold(Some("inf")),
        Err(OptionsError::NegativeThreshold { .. })
    ));
}

#[test]
fn builder_overrides_defaults() {
    let options = SwipeButtonOptions::new()
        .with_target_url("/next")
        .with_release_threshold(90.0)
        .with_metrika("777", Some("goal".into()))
        .with_goal_delay(Duration::from_millis(5));
    assert_eq!(options.target_url.as_deref(), Some("/next"));
    assert_eq!(options.release_threshold, 90.0);
    assert_eq!(options.metrika_goal.as_deref(), Some("goal"));
    assert_eq!(options.goal_delay, Duration::from_millis(5));
}
