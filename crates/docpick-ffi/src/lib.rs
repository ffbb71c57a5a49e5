//! UniFFI bindings for docpick host apps
//!
//! The host implements [`PickerHost`] on top of its platform picker (for example
//! HarmonyOS `DocumentViewPicker` or Android's document UI) and drives picks
//! through [`DocumentPickerHandle`]. Calls block the calling thread until the
//! user finishes, so hosts should call from a background thread.

use docpick_config::Config;
use docpick_engine::{
    AdapterKind, CopyDestination, DialogConfig, DialogError, DialogFuture, DialogMode,
    NativeDialog, PickedItem, PickerAdapter, PickerError, PickerOptions, SandboxDirs,
    current_os_name, normalize_suffixes,
};
use futures::executor::block_on;
use std::path::Path;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Picker was cancelled")]
    Cancelled,
    /// Reported by hosts whose picker can't serve a request
    #[error("Not supported on this platform: {reason}")]
    Unsupported { reason: String },
    #[error("Picker failed: {reason}")]
    Failed { reason: String },
}

impl From<PickerError> for FfiError {
    fn from(error: PickerError) -> Self {
        match error {
            PickerError::Cancelled => FfiError::Cancelled,
            other => FfiError::Failed {
                reason: other.to_string(),
            },
        }
    }
}

impl From<uniffi::UnexpectedUniFFICallbackError> for FfiError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        FfiError::Failed {
            reason: error.reason,
        }
    }
}

// ============ Host callback ============

/// Platform picker implemented by the host app.
#[uniffi::export(callback_interface)]
pub trait PickerHost: Send + Sync {
    /// Whether the picker can be switched between file and folder mode.
    fn supports_mode_selection(&self) -> bool;

    /// Show the picker and return the selected URIs. An empty list or
    /// `FfiError::Cancelled` means the user backed out.
    fn open_dialog(&self, request: DialogRequestDto) -> Result<Vec<String>, FfiError>;

    /// Release security-scoped access to previously returned URIs.
    fn release_access(&self, uris: Vec<String>);
}

struct HostDialog {
    host: Box<dyn PickerHost>,
}

impl NativeDialog for HostDialog {
    fn supports_mode_selection(&self) -> bool {
        self.host.supports_mode_selection()
    }

    fn open<'a>(
        &'a self,
        config: DialogConfig,
    ) -> DialogFuture<'a, Result<Vec<String>, DialogError>> {
        let request = DialogRequestDto::from_engine(config);
        Box::pin(async move {
            self.host.open_dialog(request).map_err(|e| match e {
                FfiError::Cancelled => DialogError::Dismissed,
                FfiError::Unsupported { reason } | FfiError::Failed { reason } => {
                    DialogError::Platform(reason)
                }
            })
        })
    }

    fn release_access<'a>(
        &'a self,
        uris: &'a [String],
    ) -> DialogFuture<'a, Result<(), DialogError>> {
        self.host.release_access(uris.to_vec());
        Box::pin(async { Ok(()) })
    }
}

// ============ Picker Handle ============

/// A picker bound to one host and one pair of sandbox directories.
#[derive(uniffi::Object)]
pub struct DocumentPickerHandle {
    adapter: PickerAdapter<HostDialog>,
}

#[uniffi::export]
impl DocumentPickerHandle {
    /// Create a picker for `os_name` (e.g. "android", "ios", "harmony").
    #[uniffi::constructor]
    pub fn new(
        host: Box<dyn PickerHost>,
        os_name: String,
        cache_dir: String,
        document_dir: String,
    ) -> Self {
        let dirs = SandboxDirs::new(cache_dir, document_dir);
        Self {
            adapter: PickerAdapter::for_os(&os_name, HostDialog { host }, dirs),
        }
    }

    /// Create a picker from a TOML config file.
    #[uniffi::constructor]
    pub fn from_config(host: Box<dyn PickerHost>, config_path: String) -> Result<Self, FfiError> {
        Self::from_config_at(host, Path::new(&config_path))
    }

    /// Create a picker from the config file at [`default_config_path`].
    #[uniffi::constructor]
    pub fn from_default_config(host: Box<dyn PickerHost>) -> Result<Self, FfiError> {
        Self::from_config_at(host, &Config::config_path())
    }

    /// Name of the adapter serving this handle: "generic" or "harmony".
    pub fn platform(&self) -> String {
        self.adapter.kind().name().to_string()
    }

    pub fn pick(&self, options: PickerOptionsDto) -> Result<PickResultDto, FfiError> {
        let options = options.into_engine();
        let items = block_on(self.adapter.pick(&options))?;
        Ok(PickResultDto::from_engine(items))
    }

    pub fn pick_directory(&self) -> Result<DirectoryDto, FfiError> {
        let response = block_on(self.adapter.pick_directory())?;
        Ok(DirectoryDto { uri: response.uri })
    }

    pub fn release_secure_access(&self, uris: Vec<String>) -> Result<(), FfiError> {
        block_on(self.adapter.release_secure_access(&uris))?;
        Ok(())
    }
}

impl DocumentPickerHandle {
    fn from_config_at(host: Box<dyn PickerHost>, config_path: &Path) -> Result<Self, FfiError> {
        let config = Config::load_from_path(config_path)
            .map_err(|e| FfiError::Failed {
                reason: e.to_string(),
            })?
            .ok_or_else(|| FfiError::Failed {
                reason: format!("No config file at {}", config_path.display()),
            })?;

        let os_name = config
            .platform
            .clone()
            .unwrap_or_else(|| current_os_name().to_string());
        let dirs = SandboxDirs::new(config.cache_dir, config.document_dir);
        let mut adapter = PickerAdapter::for_os(&os_name, HostDialog { host }, dirs);
        if let Some(chunk_size) = config.copy_chunk_size {
            adapter = adapter.with_chunk_size(chunk_size);
        }

        Ok(Self { adapter })
    }
}

// ============ DTOs ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum CopyToDto {
    CachesDirectory,
    DocumentDirectory,
}

/// Options for a single pick.
#[derive(Debug, Clone, uniffi::Record)]
pub struct PickerOptionsDto {
    /// Extension groups such as ".jpg .jpeg"
    pub types: Option<Vec<String>>,
    pub allow_multi_selection: bool,
    pub copy_to: Option<CopyToDto>,
}

impl PickerOptionsDto {
    fn into_engine(self) -> PickerOptions {
        PickerOptions {
            types: self.types,
            allow_multi_selection: self.allow_multi_selection,
            copy_to: self.copy_to.map(|copy_to| match copy_to {
                CopyToDto::CachesDirectory => CopyDestination::CachesDirectory,
                CopyToDto::DocumentDirectory => CopyDestination::DocumentDirectory,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum DialogModeDto {
    File,
    Folder,
}

/// What the host picker should show.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct DialogRequestDto {
    /// `None` means leave the platform default
    pub mode: Option<DialogModeDto>,
    /// Allowed suffixes, e.g. ".png"
    pub suffix_filters: Vec<String>,
    pub max_selection: Option<u32>,
}

impl DialogRequestDto {
    fn from_engine(config: DialogConfig) -> Self {
        Self {
            mode: config.mode.map(|mode| match mode {
                DialogMode::File => DialogModeDto::File,
                DialogMode::Folder => DialogModeDto::Folder,
            }),
            suffix_filters: config.suffix_filters,
            max_selection: config.max_selection,
        }
    }
}

/// One picked file.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct DocumentDto {
    /// Position in the picker's selection order
    pub position: u32,
    pub uri: String,
    pub content_type: Option<String>,
    /// Empty when the URI carries no usable name
    pub name: String,
    pub size: u64,
    pub file_copy_uri: Option<String>,
    pub copy_error: Option<String>,
}

/// A picked entry whose metadata could not be read.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ItemFailureDto {
    pub position: u32,
    pub uri: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PickResultDto {
    pub documents: Vec<DocumentDto>,
    pub failures: Vec<ItemFailureDto>,
}

impl PickResultDto {
    fn from_engine(items: Vec<PickedItem>) -> Self {
        let mut documents = Vec::new();
        let mut failures = Vec::new();

        for (position, item) in (0u32..).zip(items) {
            match item {
                Ok(response) => documents.push(DocumentDto {
                    position,
                    uri: response.uri,
                    content_type: response.content_type,
                    name: response.name,
                    size: response.size,
                    file_copy_uri: response.file_copy_uri,
                    copy_error: response.copy_error,
                }),
                Err(failure) => failures.push(ItemFailureDto {
                    position,
                    uri: failure.uri,
                    reason: failure.reason,
                }),
            }
        }

        Self {
            documents,
            failures,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct DirectoryDto {
    pub uri: String,
}

// ============ Standalone Functions ============

/// Set up logging: logcat on Android, `env_logger` elsewhere. Safe to call more than once.
#[uniffi::export]
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("DocPick"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .try_init();
    }

    log::debug!("docpick logging ready");
}

/// Flatten extension groups the same way `pick` does before configuring the dialog.
#[uniffi::export]
pub fn normalize_type_filters(types: Option<Vec<String>>) -> Vec<String> {
    normalize_suffixes(types.as_deref())
}

/// Where [`DocumentPickerHandle::from_default_config`] looks for its config file.
#[uniffi::export]
pub fn default_config_path() -> String {
    Config::config_path().to_string_lossy().to_string()
}

/// Adapter that would serve `os_name`: "generic" or "harmony".
#[uniffi::export]
pub fn adapter_for_os(os_name: String) -> String {
    AdapterKind::for_os(&os_name).name().to_string()
}
