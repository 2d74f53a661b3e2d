use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use super::definition::FieldDefinition;

/// Deserialize a field definition from an already parsed document.
pub fn parse_field_definition(value: &Value) -> Result<FieldDefinition> {
    FieldDefinition::deserialize(value).context("failed to decode field definition")
}
