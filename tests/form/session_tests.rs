use floatfield::{
    EditEvent, EditorOptions, ErrorStatus, FieldDefinition, FloatEditSession, ValidationError,
};

fn price() -> FieldDefinition {
    FieldDefinition::new("price")
        .with_required(true)
        .with_min(1.0)
        .with_max(100.0)
}

#[test]
fn typing_walks_through_states() {
    let mut session = FloatEditSession::new(price());
    let statuses: Vec<ErrorStatus> = "0,5".chars().map(|ch| session.push_char(ch)).collect();
    assert_eq!(
        statuses,
        vec![
            ErrorStatus::Invalid(ValidationError::BelowMinimum { min: 1.0 }),
            ErrorStatus::Invalid(ValidationError::PatternMismatch),
            ErrorStatus::Invalid(ValidationError::BelowMinimum { min: 1.0 }),
        ]
    );
    assert_eq!(session.input(), "0.5");
}

#[test]
fn repeated_events_are_idempotent() {
    let mut session = FloatEditSession::new(price());
    session.set_input("42,0");
    let first = session.handle_event(EditEvent::Blur);
    let second = session.handle_event(EditEvent::Blur);
    let third = session.handle_event(EditEvent::ValueChange);
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(session.input(), "42.0");
    assert_eq!(session.committed_value(), Some(42.0));
}

#[test]
fn blur_only_sessions_wait_for_focus_loss() {
    let options = EditorOptions::default().with_validate_on_change(false);
    let mut session = FloatEditSession::new(price()).with_options(options);
    assert!(session.set_input("500").is_valid());
    assert_eq!(
        session.blur(),
        ErrorStatus::Invalid(ValidationError::AboveMaximum { max: 100.0 })
    );
}

#[test]
fn template_variables_follow_definition() {
    let session = FloatEditSession::new(price());
    let variables = serde_json::to_value(session.template_variables()).unwrap();
    assert_eq!(variables["isRequired"], serde_json::json!(true));
    assert_eq!(variables["minFloatValue"], serde_json::json!(1.0));
    assert_eq!(variables["maxFloatValue"], serde_json::json!(100.0));
}
