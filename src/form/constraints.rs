use serde::{Serialize, Serializer};

use crate::domain::FieldDefinition;

/// Float literal accepted by the input control: optional sign, optional integer digits,
/// optional decimal point, at least one digit.
pub const FLOAT_PATTERN: &str = r"-?\d*\.?\d+";

/// Snapshot of the constraints that apply to one validation pass.
///
/// Serializes to the variables handed to the field template; unset bounds become `false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationParams {
    pub is_required: bool,
    pub float_pattern: &'static str,
    #[serde(serialize_with = "bound_or_false")]
    pub min_float_value: Option<f64>,
    #[serde(serialize_with = "bound_or_false")]
    pub max_float_value: Option<f64>,
}

impl ValidationParams {
    pub fn has_bounds(&self) -> bool {
        self.min_float_value.is_some() || self.max_float_value.is_some()
    }
}

/// Derive validation parameters from a field definition.
///
/// A bound only survives when it is truthy: `0` (and `-0`, `NaN`) collapses to "no bound".
pub fn derive_constraints(definition: &FieldDefinition) -> ValidationParams {
    let params = ValidationParams {
        is_required: definition.is_required,
        float_pattern: FLOAT_PATTERN,
        min_float_value: truthy(definition.min_float_value()),
        max_float_value: truthy(definition.max_float_value()),
    };
    tracing::debug!(
        field = %definition.display_label(),
        required = params.is_required,
        min = ?params.min_float_value,
        max = ?params.max_float_value,
        "derived float constraints"
    );
    params
}

fn truthy(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value != 0.0 && !value.is_nan())
}

fn bound_or_false<S>(bound: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bound {
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_bool(false),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn copies_bounds_verbatim() {
        let definition = FieldDefinition::new("price")
            .with_required(true)
            .with_min(-2.5)
            .with_max(10.0);
        let params = derive_constraints(&definition);
        assert!(params.is_required);
        assert_eq!(params.float_pattern, FLOAT_PATTERN);
        assert_eq!(params.min_float_value, Some(-2.5));
        assert_eq!(params.max_float_value, Some(10.0));
    }

    #[test]
    fn absent_bounds_stay_unset() {
        let params = derive_constraints(&FieldDefinition::new("price"));
        assert!(!params.is_required);
        assert!(!params.has_bounds());
    }

    #[test]
    fn zero_bound_is_treated_as_unset() {
        // Known quirk: a bound of exactly zero cannot be enforced.
        let definition = FieldDefinition::new("price").with_min(0.0).with_max(-0.0);
        let params = derive_constraints(&definition);
        assert_eq!(params.min_float_value, None);
        assert_eq!(params.max_float_value, None);
    }

    #[test]
    fn serializes_template_variables() {
        let definition = FieldDefinition::new("price").with_required(true).with_max(10.0);
        let variables = serde_json::to_value(derive_constraints(&definition)).unwrap();
        assert_eq!(
            variables,
            json!({
                "isRequired": true,
                "floatPattern": "-?\\d*\\.?\\d+",
                "minFloatValue": false,
                "maxFloatValue": 10.0
            })
        );
    }
}
