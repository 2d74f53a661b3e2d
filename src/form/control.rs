/// The single text input a float editor is bound to.
pub trait InputControl {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: String);
}

/// In-memory input buffer.
///
/// Programmatic rewrites through [`InputControl::set_value`] raise a change notification, the
/// way a real control fires `valuechange` when its content is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    pending_change: bool,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            buffer: value.into(),
            pending_change: false,
        }
    }

    /// Replace the content as the user would, without raising a notification.
    pub fn type_text(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    pub fn push(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn take_change_notification(&mut self) -> bool {
        std::mem::take(&mut self.pending_change)
    }

    pub fn has_pending_change(&self) -> bool {
        self.pending_change
    }
}

impl InputControl for TextInput {
    fn value(&self) -> &str {
        &self.buffer
    }

    fn set_value(&mut self, value: String) {
        if self.buffer != value {
            self.buffer = value;
            self.pending_change = true;
        }
    }
}

impl InputControl for String {
    fn value(&self) -> &str {
        self
    }

    fn set_value(&mut self, value: String) {
        *self = value;
    }
}
