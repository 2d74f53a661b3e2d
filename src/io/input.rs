use anyhow::{Context, Result, bail};
use serde_json::{Value, json};

use super::DocumentFormat;
use crate::app::EditorOptions;
use crate::domain::{FieldDefinition, parse_field_definition};

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Parse and check a field definition document.
///
/// Every shape problem is reported at once, keyed by its instance path.
pub fn load_field_definition(contents: &str, format: DocumentFormat) -> Result<FieldDefinition> {
    let value = parse_document_str(contents, format)?;
    field_definition_from_value(&value)
}

/// Check an already parsed document and decode it as a field definition.
pub fn field_definition_from_value(value: &Value) -> Result<FieldDefinition> {
    check_definition_document(value)?;
    parse_field_definition(value)
}

pub fn load_editor_options(contents: &str, format: DocumentFormat) -> Result<EditorOptions> {
    let value = parse_document_str(contents, format)?;
    editor_options_from_value(value)
}

pub fn editor_options_from_value(value: Value) -> Result<EditorOptions> {
    serde_json::from_value(value).context("failed to decode editor options")
}

fn check_definition_document(value: &Value) -> Result<()> {
    let schema = definition_schema();
    let validator =
        jsonschema::validator_for(&schema).context("failed to compile field definition schema")?;
    let issues = validator
        .iter_errors(value)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            let prefix = if pointer.is_empty() {
                "<root>".to_string()
            } else {
                pointer
            };
            format!("{prefix}: {error}")
        })
        .collect::<Vec<_>>();
    if !issues.is_empty() {
        bail!("invalid field definition:\n  {}", issues.join("\n  "));
    }
    Ok(())
}

fn definition_schema() -> Value {
    let bound = json!({"type": ["number", "null"]});
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "identifier": {"type": "string"},
            "fieldTypeIdentifier": {"type": "string"},
            "isRequired": {"type": "boolean"},
            "validatorConfiguration": {
                "type": "object",
                "properties": {
                    "FloatValueValidator": {
                        "type": "object",
                        "properties": {
                            "minFloatValue": bound,
                            "maxFloatValue": bound
                        }
                    }
                }
            }
        }
    })
}
