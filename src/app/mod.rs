mod options;
mod report;
mod session;

pub use options::EditorOptions;
pub use report::{FieldReport, ValueReport};
pub use session::{EditEvent, FloatEditSession};
