pub mod format;
pub mod loader;
pub mod model;

pub use format::{PlainTextRenderer, TextRenderer};
pub use loader::{FileProblemProvider, ProblemError, ProblemProvider};
pub use model::{ProblemDocument, ValidationError};
