use serde::{Serialize, Serializer};

/// Reason a float input was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    RequiredMissing,
    PatternMismatch,
    AboveMaximum { max: f64 },
    BelowMinimum { min: f64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::RequiredMissing => write!(f, "This field is required"),
            ValidationError::PatternMismatch => {
                write!(f, "The value should be a valid float number")
            }
            ValidationError::AboveMaximum { max } => {
                write!(f, "The value should be less than or equal to {}", js_number(*max))
            }
            ValidationError::BelowMinimum { min } => {
                write!(f, "The value should be more than or equal to {}", js_number(*min))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Render a bound the way a JavaScript host prints numbers: plain decimals in
/// `[1e-6, 1e21)`, exponent form with an explicit sign outside it.
fn js_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if value == 0.0 || value.is_nan() || (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponent_form,
    }
}

/// Outcome of a validation pass, written through to the host's error property.
///
/// Serializes as `false` when valid and as the message string otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ErrorStatus {
    #[default]
    Valid,
    Invalid(ValidationError),
}

impl ErrorStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, ErrorStatus::Valid)
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            ErrorStatus::Valid => None,
            ErrorStatus::Invalid(error) => Some(*error),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.error().map(|error| error.to_string())
    }
}

impl From<Result<(), ValidationError>> for ErrorStatus {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ErrorStatus::Valid,
            Err(error) => ErrorStatus::Invalid(error),
        }
    }
}

impl Serialize for ErrorStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ErrorStatus::Valid => serializer.serialize_bool(false),
            ErrorStatus::Invalid(error) => serializer.collect_str(error),
        }
    }
}
