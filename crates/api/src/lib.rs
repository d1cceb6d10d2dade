pub mod directory;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use directory::NodeDirectory;
pub use error::{LookupError, LookupErrorKind, LookupResult, PathError, PathResult};
pub use models::*;
