use serde::{Deserialize, Serialize};

/// Read-only description of one editable float attribute, as supplied by the host.
///
/// Field names follow the camelCase shape of content-type field definitions, so a definition
/// document can be deserialized directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub field_type_identifier: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub validator_configuration: ValidatorConfiguration,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfiguration {
    #[serde(rename = "FloatValueValidator", default)]
    pub float_value_validator: FloatValueValidator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatValueValidator {
    #[serde(default)]
    pub min_float_value: Option<f64>,
    #[serde(default)]
    pub max_float_value: Option<f64>,
}

impl FieldDefinition {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            field_type_identifier: crate::form::FLOAT_FIELD_TYPE.to_string(),
            ..Self::default()
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.is_required = required;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.validator_configuration
            .float_value_validator
            .min_float_value = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.validator_configuration
            .float_value_validator
            .max_float_value = Some(max);
        self
    }

    pub fn min_float_value(&self) -> Option<f64> {
        self.validator_configuration
            .float_value_validator
            .min_float_value
    }

    pub fn max_float_value(&self) -> Option<f64> {
        self.validator_configuration
            .float_value_validator
            .max_float_value
    }

    pub fn display_label(&self) -> String {
        if self.identifier.is_empty() {
            "<unnamed>".to_string()
        } else {
            self.identifier.clone()
        }
    }
}
