use crate::domain::FieldDefinition;
use crate::form::{
    ErrorStatus, FieldEditor, FloatFieldValidator, InputControl, TextInput, ValidationParams,
};

use super::EditorOptions;

/// View events that trigger a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    Blur,
    ValueChange,
}

/// One editing session of a float field: the bound input, the editor and the error status the
/// host observes.
#[derive(Debug, Clone)]
pub struct FloatEditSession<E = FloatFieldValidator> {
    definition: FieldDefinition,
    editor: E,
    options: EditorOptions,
    input: TextInput,
    error_status: ErrorStatus,
    dirty: bool,
    validated: bool,
    passes: usize,
}

impl FloatEditSession {
    pub fn new(definition: FieldDefinition) -> Self {
        Self::with_editor(definition, FloatFieldValidator::new())
    }
}

impl<E: FieldEditor> FloatEditSession<E> {
    pub fn with_editor(definition: FieldDefinition, editor: E) -> Self {
        Self {
            definition,
            editor,
            options: EditorOptions::default(),
            input: TextInput::default(),
            error_status: ErrorStatus::Valid,
            dirty: false,
            validated: false,
            passes: 0,
        }
    }

    pub fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn input(&self) -> &str {
        self.input.value()
    }

    pub fn error_status(&self) -> ErrorStatus {
        self.error_status
    }

    pub fn is_valid(&self) -> bool {
        self.error_status.is_valid()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of validation passes run so far, re-entrant ones included.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Variables for the field template.
    pub fn template_variables(&self) -> ValidationParams {
        self.editor.derive_constraints(&self.definition)
    }

    /// Load initial content without validating; the host decides when the first pass runs.
    pub fn seed_value(&mut self, value: impl Into<String>) {
        self.input.type_text(value);
        self.dirty = false;
        self.validated = false;
        self.error_status = ErrorStatus::Valid;
    }

    pub fn set_input(&mut self, value: impl Into<String>) -> ErrorStatus {
        self.input.type_text(value);
        self.after_edit()
    }

    pub fn push_char(&mut self, ch: char) -> ErrorStatus {
        self.input.push(ch);
        self.after_edit()
    }

    pub fn backspace(&mut self) -> ErrorStatus {
        self.input.backspace();
        self.after_edit()
    }

    pub fn blur(&mut self) -> ErrorStatus {
        self.handle_event(EditEvent::Blur)
    }

    pub fn handle_event(&mut self, event: EditEvent) -> ErrorStatus {
        let enabled = match event {
            EditEvent::Blur => self.options.validate_on_blur,
            EditEvent::ValueChange => self.options.validate_on_change,
        };
        if enabled {
            self.validate()
        } else {
            self.error_status
        }
    }

    /// Run a validation pass now and publish its status.
    ///
    /// With `validate_on_change` off, the change raised by the comma rewrite is dropped.
    pub fn validate(&mut self) -> ErrorStatus {
        let mut status = self.validate_once();
        let mut reentered = 0;
        while self.input.take_change_notification() {
            if !self.options.validate_on_change {
                break;
            }
            if reentered >= self.options.reentrant_limit() {
                tracing::warn!(
                    field = %self.definition.display_label(),
                    passes = reentered,
                    "input kept changing during validation; giving up"
                );
                break;
            }
            reentered += 1;
            status = self.validate_once();
        }
        self.error_status = status;
        self.validated = true;
        status
    }

    /// The number the host should commit, only offered once the current input passed a check.
    pub fn committed_value(&self) -> Option<f64> {
        if !self.validated || !self.is_valid() || self.input.value().is_empty() {
            return None;
        }
        self.editor.extract_numeric_value(&self.input)
    }

    fn after_edit(&mut self) -> ErrorStatus {
        self.dirty = true;
        self.validated = false;
        self.handle_event(EditEvent::ValueChange)
    }

    fn validate_once(&mut self) -> ErrorStatus {
        self.passes += 1;
        self.editor.validate(&self.definition, &mut self.input)
    }
}
