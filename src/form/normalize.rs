use std::borrow::Cow;

use super::InputControl;

/// Replace every decimal comma with a period.
pub fn normalize_decimal_separator(raw: &str) -> Cow<'_, str> {
    if raw.contains(',') {
        Cow::Owned(raw.replace(',', "."))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Rewrite the bound input with its normalized content. Returns whether anything changed.
///
/// A second call is a no-op, so a change notification raised by the rewrite cannot loop.
pub fn normalize_input(control: &mut dyn InputControl) -> bool {
    let normalized = match normalize_decimal_separator(control.value()) {
        Cow::Borrowed(_) => return false,
        Cow::Owned(text) => text,
    };
    tracing::trace!(from = control.value(), to = %normalized, "normalized decimal separator");
    control.set_value(normalized);
    true
}
