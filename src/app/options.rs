use serde::{Deserialize, Serialize};

/// Host-side switches for when a float editor validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    pub validate_on_blur: bool,
    pub validate_on_change: bool,
    /// Extra passes allowed when a pass rewrites the input and the control reports a change.
    pub max_reentrant_passes: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            validate_on_blur: true,
            validate_on_change: true,
            max_reentrant_passes: 1,
        }
    }
}

impl EditorOptions {
    pub fn with_validate_on_blur(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }

    pub fn with_validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    pub fn with_max_reentrant_passes(mut self, passes: usize) -> Self {
        self.max_reentrant_passes = passes;
        self
    }

    pub(crate) fn reentrant_limit(&self) -> usize {
        self.max_reentrant_passes.max(1)
    }
}
