#![deny(rust_2018_idioms)]

pub mod app;
pub mod domain;
pub mod form;
pub mod io;

pub use app::{EditEvent, EditorOptions, FieldReport, FloatEditSession, ValueReport};
pub use domain::{
    FieldDefinition, FloatValueValidator, ValidatorConfiguration, parse_field_definition,
};
pub use form::{
    ErrorStatus, FLOAT_FIELD_TYPE, FLOAT_PATTERN, FieldEditor, FloatFieldValidator, InputControl,
    NativeValidity, PatternValidity, TextInput, ValidationError, ValidationParams, ValidityOracle,
    derive_constraints, evaluate, normalize_decimal_separator, normalize_input, parse_float_prefix,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, editor_options_from_value, emit,
    field_definition_from_value, load_editor_options, load_field_definition, parse_document_str,
    render,
};

pub mod prelude {
    pub use super::{
        EditEvent, ErrorStatus, FieldDefinition, FieldEditor, FloatEditSession,
        FloatFieldValidator, ValidationError,
    };
}
