pub mod dialog;
pub mod error;
pub mod materialize;
pub mod metadata;
pub mod mime;
pub mod models;
pub mod picker;
pub mod platform;
pub mod suffix;
pub mod uri;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use dialog::*;
pub use error::*;
pub use materialize::*;
pub use metadata::*;
pub use models::*;
pub use picker::*;
pub use platform::*;
pub use suffix::*;
