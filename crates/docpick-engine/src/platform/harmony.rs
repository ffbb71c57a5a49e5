//! HarmonyOS adapter profile
//!
//! `fs.copyFile` is unreliable on picker-provided URIs, so copies go through an
//! explicit read/write loop. Picker URIs carry no scoped permission that needs
//! handing back.

use crate::dialog::NativeDialog;
use crate::materialize::{CopyStrategy, DEFAULT_CHUNK_SIZE, SandboxDirs};
use crate::picker::{DocumentPicker, ReleasePolicy};

pub fn picker<D: NativeDialog>(dialog: D, dirs: SandboxDirs) -> DocumentPicker<D> {
    DocumentPicker::new(dialog, dirs)
        .with_copy_strategy(CopyStrategy::Streamed {
            chunk_size: DEFAULT_CHUNK_SIZE,
        })
        .with_release_policy(ReleasePolicy::NotRequired)
}
