use crate::domain::FieldDefinition;

use super::{
    ErrorStatus, FLOAT_FIELD_TYPE, FieldEditor, InputControl, NativeValidity, PatternValidity,
    ValidationError, ValidationParams, ValidityOracle, derive_constraints, normalize_input,
    parse_float_prefix,
};

/// Validates float input against a field definition.
///
/// Checks run in a fixed order and the first failing one decides the status:
/// presence, format, maximum, minimum.
#[derive(Debug, Clone, Default)]
pub struct FloatFieldValidator<O = PatternValidity> {
    oracle: O,
}

impl FloatFieldValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: ValidityOracle> FloatFieldValidator<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Validate an already normalized value without a bound control.
    pub fn check(&self, params: &ValidationParams, normalized: &str) -> ErrorStatus {
        let validity = self.oracle.validity(normalized, params);
        evaluate(params, normalized, validity)
    }
}

/// Ordered decision over the native signals and the configured bounds.
pub fn evaluate(
    params: &ValidationParams,
    normalized: &str,
    validity: NativeValidity,
) -> ErrorStatus {
    let status = ErrorStatus::from(decide(params, normalized, validity));
    tracing::debug!(value = normalized, status = ?status, "float validation pass");
    status
}

fn decide(
    params: &ValidationParams,
    normalized: &str,
    validity: NativeValidity,
) -> Result<(), ValidationError> {
    if validity.value_missing {
        return Err(ValidationError::RequiredMissing);
    }
    if validity.pattern_mismatch {
        return Err(ValidationError::PatternMismatch);
    }
    // An empty optional value has nothing to compare against the bounds.
    if normalized.is_empty() || !params.has_bounds() {
        return Ok(());
    }

    let value = normalized.parse::<f64>().map_err(|_| {
        tracing::warn!(
            value = normalized,
            "value passed the format check but is not a float"
        );
        ValidationError::PatternMismatch
    })?;

    if let Some(max) = params.max_float_value
        && value > max
    {
        return Err(ValidationError::AboveMaximum { max });
    }
    if let Some(min) = params.min_float_value
        && value < min
    {
        return Err(ValidationError::BelowMinimum { min });
    }
    Ok(())
}

impl<O: ValidityOracle> FieldEditor for FloatFieldValidator<O> {
    fn field_type_identifier(&self) -> &'static str {
        FLOAT_FIELD_TYPE
    }

    fn derive_constraints(&self, definition: &FieldDefinition) -> ValidationParams {
        derive_constraints(definition)
    }

    fn validate(
        &self,
        definition: &FieldDefinition,
        control: &mut dyn InputControl,
    ) -> ErrorStatus {
        let params = derive_constraints(definition);
        normalize_input(control);
        self.check(&params, control.value())
    }

    fn extract_numeric_value(&self, control: &dyn InputControl) -> Option<f64> {
        parse_float_prefix(&super::normalize_decimal_separator(control.value()))
    }
}
