use floatfield::{
    ErrorStatus, FieldDefinition, FieldEditor, FloatFieldValidator, PatternValidity, TextInput,
    ValidationError, normalize_decimal_separator, parse_float_prefix,
};
use proptest::prelude::*;

fn validate(definition: &FieldDefinition, raw: &str) -> ErrorStatus {
    let mut input = TextInput::new(raw);
    FloatFieldValidator::new().validate(definition, &mut input)
}

fn bound() -> impl Strategy<Value = f64> {
    (-1000.0_f64..1000.0).prop_filter("zero bounds are unset", |value| *value != 0.0)
}

fn literal() -> impl Strategy<Value = String> {
    r"-?[0-9]{0,4}(\.[0-9]{1,3}|[0-9])"
}

proptest! {
    #[test]
    fn required_empty_input_is_always_missing(
        min in proptest::option::of(bound()),
        max in proptest::option::of(bound())
    ) {
        let mut definition = FieldDefinition::new("price").with_required(true);
        let bounds = &mut definition.validator_configuration.float_value_validator;
        bounds.min_float_value = min;
        bounds.max_float_value = max;
        prop_assert_eq!(
            validate(&definition, ""),
            ErrorStatus::Invalid(ValidationError::RequiredMissing)
        );
    }

    #[test]
    fn non_float_text_is_a_pattern_mismatch(raw in "[a-z ]{1,8}") {
        prop_assert_eq!(
            validate(&FieldDefinition::new("price"), &raw),
            ErrorStatus::Invalid(ValidationError::PatternMismatch)
        );
    }

    #[test]
    fn maximum_splits_values(raw in literal(), max in bound()) {
        let value: f64 = raw.parse().unwrap();
        let status = validate(&FieldDefinition::new("price").with_max(max), &raw);
        if value > max {
            prop_assert_eq!(status, ErrorStatus::Invalid(ValidationError::AboveMaximum { max }));
        } else {
            prop_assert_eq!(status, ErrorStatus::Valid);
        }
    }

    #[test]
    fn minimum_splits_values(raw in literal(), min in bound()) {
        let value: f64 = raw.parse().unwrap();
        let status = validate(&FieldDefinition::new("price").with_min(min), &raw);
        if value < min {
            prop_assert_eq!(status, ErrorStatus::Invalid(ValidationError::BelowMinimum { min }));
        } else {
            prop_assert_eq!(status, ErrorStatus::Valid);
        }
    }

    #[test]
    fn normalization_is_idempotent(raw in "[0-9,.\\-a-z]{0,12}") {
        let once = normalize_decimal_separator(&raw).into_owned();
        let twice = normalize_decimal_separator(&once).into_owned();
        prop_assert!(!once.contains(','));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn comma_input_validates_like_point_input(raw in literal(), max in bound()) {
        let definition = FieldDefinition::new("price").with_max(max);
        let comma = raw.replace('.', ",");
        prop_assert_eq!(validate(&definition, &comma), validate(&definition, &raw));
    }

    #[test]
    fn pattern_literals_parse_fully(raw in literal()) {
        prop_assert!(PatternValidity::default().is_match(&raw));
        prop_assert_eq!(parse_float_prefix(&raw), raw.parse::<f64>().ok());
    }
}
