//! The seam between the picker and the OS selection surface.
//!
//! Hosts implement [`NativeDialog`] on top of whatever the platform offers
//! (HarmonyOS `DocumentViewPicker`, a UniFFI callback, `rfd` on desktop).

#[cfg(feature = "desktop-dialog")]
mod desktop;

#[cfg(feature = "desktop-dialog")]
pub use desktop::DesktopDialog;

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`NativeDialog`] methods.
pub type DialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    File,
    Folder,
}

/// Configuration handed to the native dialog for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogConfig {
    /// Requested selection mode. `None` leaves the platform default in place.
    pub mode: Option<DialogMode>,
    /// Allow-listed suffixes as given by the caller (e.g. `.png`)
    pub suffix_filters: Vec<String>,
    /// Upper bound on selected entries
    pub max_selection: Option<u32>,
}

impl DialogConfig {
    /// Suffix filters without their leading dot, as most desktop toolkits expect.
    pub fn bare_extensions(&self) -> Vec<&str> {
        self.suffix_filters
            .iter()
            .map(|suffix| suffix.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("dialog dismissed")]
    Dismissed,
    #[error("dialog failed: {0}")]
    Platform(String),
}

/// OS file selection surface.
pub trait NativeDialog {
    /// Whether the surface can be told to select files vs folders and honour suffix filters.
    fn supports_mode_selection(&self) -> bool;

    /// Open the modal surface and return the selected URIs in platform order.
    ///
    /// An empty list means nothing was selected.
    fn open<'a>(
        &'a self,
        config: DialogConfig,
    ) -> DialogFuture<'a, Result<Vec<String>, DialogError>>;

    /// Give back security-scoped access obtained for `uris`.
    fn release_access<'a>(
        &'a self,
        uris: &'a [String],
    ) -> DialogFuture<'a, Result<(), DialogError>> {
        let _ = uris;
        Box::pin(async { Ok(()) })
    }
}

impl<D: NativeDialog + ?Sized> NativeDialog for Box<D> {
    fn supports_mode_selection(&self) -> bool {
        (**self).supports_mode_selection()
    }

    fn open<'a>(
        &'a self,
        config: DialogConfig,
    ) -> DialogFuture<'a, Result<Vec<String>, DialogError>> {
        (**self).open(config)
    }

    fn release_access<'a>(
        &'a self,
        uris: &'a [String],
    ) -> DialogFuture<'a, Result<(), DialogError>> {
        (**self).release_access(uris)
    }
}
