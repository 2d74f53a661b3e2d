mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{
    editor_options_from_value, field_definition_from_value, load_editor_options,
    load_field_definition, parse_document_str,
};
pub use output::{OutputDestination, OutputOptions, emit, render};
