use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::{FLOAT_PATTERN, ValidationParams};

/// Built-in presence and format signals of an input control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeValidity {
    pub value_missing: bool,
    pub pattern_mismatch: bool,
}

impl NativeValidity {
    pub fn is_valid(&self) -> bool {
        !self.value_missing && !self.pattern_mismatch
    }
}

/// Strategy answering the native-validity query for a normalized value.
pub trait ValidityOracle {
    fn validity(&self, value: &str, params: &ValidationParams) -> NativeValidity;
}

impl<F> ValidityOracle for F
where
    F: Fn(&str, &ValidationParams) -> NativeValidity,
{
    fn validity(&self, value: &str, params: &ValidationParams) -> NativeValidity {
        self(value, params)
    }
}

static FLOAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    anchored(FLOAT_PATTERN).expect("float pattern literal compiles")
});

/// Constraint validation as a `required` + `pattern` text input performs it.
///
/// The pattern must match the whole value and is not evaluated on empty values. Digit classes
/// are ASCII-only, except in custom patterns that need Unicode mode (see [`PatternValidity::new`]).
#[derive(Debug, Clone)]
pub struct PatternValidity {
    pattern: Regex,
}

impl PatternValidity {
    /// Compile a custom anchored pattern.
    ///
    /// Patterns that could match arbitrary bytes, such as `.` or negated classes, are compiled
    /// in Unicode mode, where `\d` also accepts non-ASCII digits.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: anchored(pattern)?,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

impl Default for PatternValidity {
    fn default() -> Self {
        Self {
            pattern: FLOAT_REGEX.clone(),
        }
    }
}

impl ValidityOracle for PatternValidity {
    fn validity(&self, value: &str, params: &ValidationParams) -> NativeValidity {
        let empty = value.is_empty();
        NativeValidity {
            value_missing: params.is_required && empty,
            pattern_mismatch: !empty && !self.is_match(value),
        }
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    let anchored = format!("^(?:{pattern})$");
    RegexBuilder::new(&anchored)
        .unicode(false)
        .build()
        .or_else(|_| RegexBuilder::new(&anchored).build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldDefinition;
    use crate::form::derive_constraints;

    fn params(required: bool) -> ValidationParams {
        derive_constraints(&FieldDefinition::new("price").with_required(required))
    }

    #[test]
    fn pattern_matches_whole_value() {
        let oracle = PatternValidity::default();
        for ok in ["0", "-3.5", ".5", "-.5", "12", "007.10"] {
            assert!(oracle.is_match(ok), "{ok} should match");
        }
        for bad in ["12.3.4", "abc", "5.", "+1", "1e5", " 1", "1 ", "-", "٣"] {
            assert!(!oracle.is_match(bad), "{bad} should not match");
        }
    }

    #[test]
    fn empty_value_is_missing_only_when_required() {
        let oracle = PatternValidity::default();
        assert_eq!(
            oracle.validity("", &params(true)),
            NativeValidity {
                value_missing: true,
                pattern_mismatch: false
            }
        );
        assert!(oracle.validity("", &params(false)).is_valid());
    }

    #[test]
    fn closures_act_as_oracles() {
        let always_missing = |_: &str, _: &ValidationParams| NativeValidity {
            value_missing: true,
            pattern_mismatch: false,
        };
        assert!(always_missing.validity("1", &params(false)).value_missing);
    }

    #[test]
    fn custom_pattern_may_use_any_character_classes() {
        let oracle = PatternValidity::new(r"[^x]+\.\d").unwrap();
        assert!(oracle.is_match("ab.1"));
        assert!(oracle.is_match("é.1"));
        assert!(!oracle.is_match("x.1"));
        let wildcard = PatternValidity::new(r".+kg").unwrap();
        assert!(wildcard.is_match("12 kg"));
        assert!(!wildcard.is_match("kg"));
    }

    #[test]
    fn invalid_custom_pattern_is_an_error() {
        assert!(PatternValidity::new("(").is_err());
    }

    #[test]
    fn custom_pattern_is_anchored() {
        let oracle = PatternValidity::new(r"\d+").unwrap();
        assert!(oracle.is_match("42"));
        assert!(!oracle.is_match("42a"));
    }
}
