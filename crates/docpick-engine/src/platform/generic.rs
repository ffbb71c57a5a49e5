//! Adapter profile for iOS, Android, desktop and web hosts.
//!
//! These platforms provide a dependable bulk copy, and on Apple platforms picked
//! URIs are security-scoped, so releasing access is forwarded to the dialog.

use crate::dialog::NativeDialog;
use crate::materialize::{CopyStrategy, SandboxDirs};
use crate::picker::{DocumentPicker, ReleasePolicy};

pub fn picker<D: NativeDialog>(dialog: D, dirs: SandboxDirs) -> DocumentPicker<D> {
    DocumentPicker::new(dialog, dirs)
        .with_copy_strategy(CopyStrategy::Native)
        .with_release_policy(ReleasePolicy::DelegateToDialog)
}
