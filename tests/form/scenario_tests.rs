use floatfield::{
    DocumentFormat, ErrorStatus, FieldDefinition, FieldEditor, FloatFieldValidator, InputControl,
    TextInput, ValidationError, load_field_definition,
};

fn run(definition: &FieldDefinition, raw: &str) -> (ErrorStatus, String) {
    let mut input = TextInput::new(raw);
    let status = FloatFieldValidator::new().validate(definition, &mut input);
    (status, input.value().to_string())
}

#[test]
fn maximum_violation_reads_exact_message() {
    let definition = FieldDefinition::new("price").with_max(10.0);
    let (status, _) = run(&definition, "15");
    assert_eq!(
        status.message().as_deref(),
        Some("The value should be less than or equal to 10")
    );
}

#[test]
fn unconstrained_negative_input_is_valid() {
    let (status, _) = run(&FieldDefinition::new("delta"), "-3.5");
    assert_eq!(status, ErrorStatus::Valid);
}

#[test]
fn required_check_precedes_zero_minimum() {
    // The zero minimum is dropped as "unset"; the empty value must still report missing.
    let definition = FieldDefinition::new("price").with_required(true).with_min(0.0);
    let (status, _) = run(&definition, "");
    assert_eq!(status, ErrorStatus::Invalid(ValidationError::RequiredMissing));
}

#[test]
fn zero_minimum_is_not_enforced() {
    let definition = FieldDefinition::new("price").with_min(0.0);
    let (status, _) = run(&definition, "-100");
    assert!(status.is_valid());
}

#[test]
fn decimal_comma_matches_decimal_point() {
    let definition = FieldDefinition::new("pi").with_min(3.0).with_max(3.2);
    let (comma_status, normalized) = run(&definition, "3,14");
    let (point_status, _) = run(&definition, "3.14");
    assert_eq!(normalized, "3.14");
    assert_eq!(comma_status, point_status);
}

#[test]
fn well_formedness_is_checked_before_range() {
    let definition = FieldDefinition::new("price").with_max(1.0);
    for raw in ["12.3.4", "abc", "99x"] {
        let (status, _) = run(&definition, raw);
        assert_eq!(status, ErrorStatus::Invalid(ValidationError::PatternMismatch), "{raw}");
    }
}

#[test]
fn loaded_definition_drives_validation() {
    let raw = r#"{
        "identifier": "weight",
        "fieldTypeIdentifier": "ezfloat",
        "isRequired": false,
        "validatorConfiguration": {
            "FloatValueValidator": {"minFloatValue": 0.5, "maxFloatValue": null}
        }
    }"#;
    let definition = load_field_definition(raw, DocumentFormat::Json).unwrap();
    let (status, _) = run(&definition, "0,25");
    assert_eq!(
        status.message().as_deref(),
        Some("The value should be more than or equal to 0.5")
    );
    let (status, _) = run(&definition, "");
    assert!(status.is_valid());
}

#[test]
fn extraction_is_independent_of_validity() {
    let validator = FloatFieldValidator::new();
    let input = TextInput::new("12.3.4");
    assert_eq!(validator.extract_numeric_value(&input), Some(12.3));
    let input = TextInput::new("abc");
    assert_eq!(validator.extract_numeric_value(&input), None);
}
