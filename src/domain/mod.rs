mod definition;
mod parser;

pub use definition::{FieldDefinition, FloatValueValidator, ValidatorConfiguration};
pub use parser::parse_field_definition;
