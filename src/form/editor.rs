use crate::domain::FieldDefinition;

use super::{ErrorStatus, InputControl, ValidationParams};

/// Field-type identifier float editors are registered under.
pub const FLOAT_FIELD_TYPE: &str = "ezfloat";

/// Capability a host dispatches to for one field type.
pub trait FieldEditor {
    fn field_type_identifier(&self) -> &'static str;

    fn derive_constraints(&self, definition: &FieldDefinition) -> ValidationParams;

    /// Run one validation pass against the bound input. May rewrite the input.
    fn validate(&self, definition: &FieldDefinition, control: &mut dyn InputControl)
    -> ErrorStatus;

    /// Committed numeric value of the input, `None` when it has no numeric prefix.
    fn extract_numeric_value(&self, control: &dyn InputControl) -> Option<f64>;

    fn handles(&self, definition: &FieldDefinition) -> bool {
        definition.field_type_identifier.is_empty()
            || definition.field_type_identifier == self.field_type_identifier()
    }
}
