mod constraints;
mod control;
mod editor;
mod error;
mod normalize;
mod numeric;
mod validator;
mod validity;

pub use constraints::{FLOAT_PATTERN, ValidationParams, derive_constraints};
pub use control::{InputControl, TextInput};
pub use editor::{FLOAT_FIELD_TYPE, FieldEditor};
pub use error::{ErrorStatus, ValidationError};
pub use normalize::{normalize_decimal_separator, normalize_input};
pub use numeric::parse_float_prefix;
pub use validator::{FloatFieldValidator, evaluate};
pub use validity::{NativeValidity, PatternValidity, ValidityOracle};
