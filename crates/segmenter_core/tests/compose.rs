use segmenter_core::{validate_message, ComposeError, ComposePolicy, Encoding, DEFAULT_MAX_CHARS};

#[test]
fn default_policy_matches_dashboard_limit() {
    let policy = ComposePolicy::default();
    assert_eq!(policy.max_chars, DEFAULT_MAX_CHARS);
    assert_eq!(policy.max_segments, None);
}

#[test]
fn empty_and_blank_messages_are_rejected() {
    let policy = ComposePolicy::default();
    assert_eq!(validate_message("", &policy), Err(ComposeError::Empty));
    assert_eq!(validate_message(" \n\t", &policy), Err(ComposeError::Empty));
}

#[test]
fn length_is_measured_in_utf16_units() {
    let policy = ComposePolicy {
        max_chars: 4,
        max_segments: None,
    };
    assert!(validate_message("a🦀b", &policy).is_ok());
    assert_eq!(
        validate_message("ab🦀c", &policy),
        Err(ComposeError::TooLong { len: 5, max: 4 })
    );
}

#[test]
fn segment_ceiling_is_enforced() {
    let policy = ComposePolicy {
        max_chars: DEFAULT_MAX_CHARS,
        max_segments: Some(2),
    };
    let two = "a".repeat(306);
    let three = "a".repeat(307);
    assert_eq!(validate_message(&two, &policy).map(|r| r.segment_count), Ok(2));
    assert_eq!(
        validate_message(&three, &policy),
        Err(ComposeError::TooManySegments {
            segments: 3,
            max: 2
        })
    );
}

#[test]
fn accepted_message_returns_segmentation() {
    let result = validate_message("Γειά σας", &ComposePolicy::default()).unwrap();
    assert_eq!(result.encoding, Encoding::Ucs2);
    assert_eq!(result.units, 8);
}

#[test]
fn errors_render_for_users() {
    let err = ComposeError::TooLong { len: 2100, max: 2000 };
    assert_eq!(err.to_string(), "message text is 2100 characters, limit is 2000");
}
