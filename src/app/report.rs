use serde::Serialize;

use crate::domain::FieldDefinition;
use crate::form::ErrorStatus;

use super::{EditorOptions, FloatEditSession};

/// Outcome of replaying one raw input through a fresh editing session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueReport {
    pub input: String,
    pub normalized: String,
    pub error_status: ErrorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl ValueReport {
    /// Type `raw` into the field, then leave it.
    pub fn replay(definition: &FieldDefinition, options: &EditorOptions, raw: &str) -> Self {
        let mut session =
            FloatEditSession::new(definition.clone()).with_options(options.clone());
        session.set_input(raw);
        session.blur();
        Self {
            input: raw.to_string(),
            normalized: session.input().to_string(),
            error_status: session.error_status(),
            value: session.committed_value(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error_status.is_valid()
    }
}

/// Reports for every value replayed against one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub results: Vec<ValueReport>,
}

impl FieldReport {
    pub fn build<'a>(
        definition: &FieldDefinition,
        options: &EditorOptions,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let results = values
            .into_iter()
            .map(|raw| ValueReport::replay(definition, options, raw))
            .collect();
        Self {
            field: definition.display_label(),
            results,
        }
    }

    pub fn invalid_count(&self) -> usize {
        self.results.iter().filter(|report| !report.is_valid()).count()
    }
}
