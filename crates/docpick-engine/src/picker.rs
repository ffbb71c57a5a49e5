use crate::dialog::{DialogConfig, DialogError, DialogMode, NativeDialog};
use crate::error::PickerError;
use crate::materialize::{CopyStrategy, SandboxDirs, materialize};
use crate::metadata::resolve_metadata;
use crate::models::{
    CopyDestination, DirectoryPickerResponse, ItemFailure, PickedItem, PickerOptions,
};
use crate::suffix::normalize_suffixes;
use crate::uri::path_to_uri;
use futures::future::{AbortRegistration, Abortable, join_all};

/// Whether `release_secure_access` has to reach the dialog layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleasePolicy {
    /// Picker URIs carry no scoped permission, releasing is a no-op
    #[default]
    NotRequired,
    /// Forward to [`NativeDialog::release_access`]
    DelegateToDialog,
}

/// Runs native selection dialogs and translates their results.
///
/// One picker serves any number of sequential or concurrent `pick` calls; it
/// holds no per-call state.
#[derive(Debug)]
pub struct DocumentPicker<D> {
    dialog: D,
    dirs: SandboxDirs,
    copy_strategy: CopyStrategy,
    release_policy: ReleasePolicy,
}

impl<D: NativeDialog> DocumentPicker<D> {
    pub fn new(dialog: D, dirs: SandboxDirs) -> Self {
        Self {
            dialog,
            dirs,
            copy_strategy: CopyStrategy::default(),
            release_policy: ReleasePolicy::default(),
        }
    }

    pub fn with_copy_strategy(mut self, copy_strategy: CopyStrategy) -> Self {
        self.copy_strategy = copy_strategy;
        self
    }

    pub fn with_release_policy(mut self, release_policy: ReleasePolicy) -> Self {
        self.release_policy = release_policy;
        self
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn sandbox_dirs(&self) -> &SandboxDirs {
        &self.dirs
    }

    pub fn copy_strategy(&self) -> CopyStrategy {
        self.copy_strategy
    }

    pub fn release_policy(&self) -> ReleasePolicy {
        self.release_policy
    }

    /// Let the user pick one or more files.
    ///
    /// Each selected entry is resolved independently: a file whose metadata can't be
    /// read becomes an `Err` slot, a failed copy is reported through `copy_error`.
    ///
    /// Metadata lookups and copies are blocking filesystem calls, so the joined slots
    /// complete one after another on the polling thread. Only the all-settled
    /// reporting is concurrent in shape.
    pub async fn pick(&self, options: &PickerOptions) -> Result<Vec<PickedItem>, PickerError> {
        let config = self.file_dialog_config(options);
        let mut uris = self.open_dialog(config).await?;

        if !options.allow_multi_selection && uris.len() > 1 {
            log::warn!(
                "dialog returned {} entries for a single selection, keeping the first",
                uris.len()
            );
            uris.truncate(1);
        }

        let items = join_all(
            uris.iter()
                .map(|uri| self.resolve_item(uri, options.copy_to)),
        )
        .await;
        log::debug!("resolved {} picked entries", items.len());
        Ok(items)
    }

    /// Like [`pick`](Self::pick), but resolves to `Cancelled` once `registration`'s handle aborts.
    pub async fn pick_abortable(
        &self,
        options: &PickerOptions,
        registration: AbortRegistration,
    ) -> Result<Vec<PickedItem>, PickerError> {
        match Abortable::new(self.pick(options), registration).await {
            Ok(result) => result,
            Err(_aborted) => {
                log::debug!("pick aborted by host");
                Err(PickerError::Cancelled)
            }
        }
    }

    /// Let the user pick a directory. Only the first returned entry is used.
    ///
    /// Dialogs without mode selection are opened in their default mode.
    pub async fn pick_directory(&self) -> Result<DirectoryPickerResponse, PickerError> {
        let mut config = DialogConfig::default();
        if self.dialog.supports_mode_selection() {
            config.mode = Some(DialogMode::Folder);
        } else {
            log::debug!("dialog has no mode selection, opening in its default mode");
        }

        let uris = self.open_dialog(config).await?;
        let uri = uris.into_iter().next().ok_or(PickerError::Cancelled)?;
        Ok(DirectoryPickerResponse { uri })
    }

    pub async fn release_secure_access(&self, uris: &[String]) -> Result<(), PickerError> {
        match self.release_policy {
            ReleasePolicy::NotRequired => Ok(()),
            ReleasePolicy::DelegateToDialog => self
                .dialog
                .release_access(uris)
                .await
                .map_err(|e| PickerError::Dialog(e.to_string())),
        }
    }

    fn file_dialog_config(&self, options: &PickerOptions) -> DialogConfig {
        let mut config = DialogConfig {
            max_selection: (!options.allow_multi_selection).then_some(1),
            ..DialogConfig::default()
        };

        if self.dialog.supports_mode_selection() {
            config.mode = Some(DialogMode::File);
            config.suffix_filters = normalize_suffixes(options.types.as_deref());
        } else {
            log::debug!("dialog has no mode selection, opening without suffix filters");
        }

        config
    }

    async fn open_dialog(&self, config: DialogConfig) -> Result<Vec<String>, PickerError> {
        match self.dialog.open(config).await {
            Ok(uris) if uris.is_empty() => {
                log::debug!("dialog closed without a selection");
                Err(PickerError::Cancelled)
            }
            Ok(uris) => Ok(uris),
            Err(DialogError::Dismissed) => Err(PickerError::Cancelled),
            Err(DialogError::Platform(reason)) => {
                log::warn!("picker dialog failed: {reason}");
                Err(PickerError::Dialog(reason))
            }
        }
    }

    // No await points: see the note on `pick`.
    async fn resolve_item(&self, uri: &str, copy_to: Option<CopyDestination>) -> PickedItem {
        let resolved = resolve_metadata(uri).map_err(|e| {
            log::warn!("could not resolve {uri}: {e}");
            ItemFailure {
                uri: uri.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut response = resolved.response;
        if let Some(destination) = copy_to {
            match materialize(
                &resolved.path,
                Some(response.name.as_str()),
                self.dirs.root_for(destination),
                self.copy_strategy,
            ) {
                Ok(copy) => response.file_copy_uri = Some(path_to_uri(&copy)),
                Err(e) => {
                    log::warn!("could not copy {uri}: {e}");
                    response.copy_error = Some(e.to_string());
                }
            }
        }

        Ok(response)
    }
}
