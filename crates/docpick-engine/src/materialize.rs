//! Copies picked files into app-owned sandbox storage.
//!
//! Picker handles may stop being readable once the dialog session ends, so
//! callers can ask for a private copy. Every copy lands in its own
//! `<root>/<uuid>/` directory so repeated picks of the same name never collide.

use crate::error::PickerError;
use crate::models::CopyDestination;
use crate::uri::plain_file_name;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Host-provided sandbox roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxDirs {
    pub cache_dir: PathBuf,
    pub document_dir: PathBuf,
}

impl SandboxDirs {
    pub fn new(cache_dir: impl Into<PathBuf>, document_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            document_dir: document_dir.into(),
        }
    }

    pub fn root_for(&self, destination: CopyDestination) -> &Path {
        match destination {
            CopyDestination::CachesDirectory => &self.cache_dir,
            CopyDestination::DocumentDirectory => &self.document_dir,
        }
    }
}

/// How file bytes are moved into the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStrategy {
    /// Explicit read/write loop. Used where the OS copy primitive can't be trusted
    /// with picker-provided paths.
    Streamed { chunk_size: usize },
    /// Single filesystem copy call.
    Native,
}

impl Default for CopyStrategy {
    fn default() -> Self {
        CopyStrategy::Streamed {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Copy `source` into a fresh unique directory under `root` and return the new path.
///
/// The returned path is absolute even when `root` is relative. A missing name, or
/// one that isn't a plain file name, is replaced with a timestamp.
pub fn materialize(
    source: &Path,
    file_name: Option<&str>,
    root: &Path,
    strategy: CopyStrategy,
) -> Result<PathBuf, PickerError> {
    let root = std::path::absolute(root)?;
    let target_dir = root.join(Uuid::new_v4().to_string());
    fs::create_dir_all(&target_dir)?;

    let file_name = match file_name.and_then(plain_file_name) {
        Some(name) => name.to_string(),
        None => {
            if let Some(rejected) = file_name.filter(|name| !name.is_empty()) {
                log::warn!("not using {rejected:?} as a copy name, falling back to a timestamp");
            }
            fallback_file_name()
        }
    };
    let destination = target_dir.join(file_name);

    match strategy {
        CopyStrategy::Streamed { chunk_size } => {
            let mut reader = File::open(source)?;
            let mut writer = File::create(&destination)?;
            stream_copy(&mut reader, &mut writer, chunk_size)?;
            writer.sync_all()?;
        }
        CopyStrategy::Native => {
            fs::copy(source, &destination)?;
        }
    }

    log::debug!(
        "copied {} to {}",
        source.display(),
        destination.display()
    );
    Ok(destination)
}

/// Move all bytes from `reader` to `writer` in `chunk_size` pieces.
///
/// A chunk size of zero falls back to [`DEFAULT_CHUNK_SIZE`].
pub fn stream_copy<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    chunk_size: usize,
) -> io::Result<u64> {
    let chunk_size = if chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        chunk_size
    };
    let mut buffer = vec![0u8; chunk_size];
    let mut total = 0u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..read])?;
        total += read as u64;
    }

    writer.flush()?;
    Ok(total)
}

fn fallback_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    millis.to_string()
}
