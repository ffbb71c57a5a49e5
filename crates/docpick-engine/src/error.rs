use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported file reference: {0}")]
    InvalidUri(String),
    #[error("Picker was cancelled")]
    Cancelled,
    #[error("Picker dialog failed: {0}")]
    Dialog(String),
}

impl PickerError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PickerError::Cancelled)
    }
}
