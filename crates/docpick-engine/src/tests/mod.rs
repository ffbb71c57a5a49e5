use crate::dialog::{DialogConfig, DialogError, DialogFuture, NativeDialog};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for test files
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Deterministic non-repeating-looking content of a given size
pub fn patterned_bytes(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 31 % 251) as u8).collect()
}

/// Dialog double that replays a canned answer and records what it was asked.
pub struct ScriptedDialog {
    pub mode_selection: bool,
    pub answer: Result<Vec<String>, DialogError>,
    pub seen: RefCell<Vec<DialogConfig>>,
    pub released: RefCell<Vec<String>>,
}

impl ScriptedDialog {
    pub fn returning(uris: Vec<String>) -> Self {
        Self {
            mode_selection: true,
            answer: Ok(uris),
            seen: RefCell::new(Vec::new()),
            released: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: DialogError) -> Self {
        Self {
            answer: Err(error),
            ..Self::returning(Vec::new())
        }
    }

    pub fn without_mode_selection(mut self) -> Self {
        self.mode_selection = false;
        self
    }

    pub fn last_config(&self) -> DialogConfig {
        self.seen.borrow().last().cloned().unwrap()
    }
}

impl NativeDialog for ScriptedDialog {
    fn supports_mode_selection(&self) -> bool {
        self.mode_selection
    }

    fn open<'a>(
        &'a self,
        config: DialogConfig,
    ) -> DialogFuture<'a, Result<Vec<String>, DialogError>> {
        self.seen.borrow_mut().push(config);
        let answer = self.answer.clone();
        Box::pin(async move { answer })
    }

    fn release_access<'a>(
        &'a self,
        uris: &'a [String],
    ) -> DialogFuture<'a, Result<(), DialogError>> {
        self.released.borrow_mut().extend(uris.iter().cloned());
        Box::pin(async { Ok(()) })
    }
}
