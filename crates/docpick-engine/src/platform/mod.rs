//! Platform-specific adapter selection
//!
//! The generic adapter answers on the mainstream platforms; any other OS
//! identifier is treated as HarmonyOS.

pub mod generic;
pub mod harmony;

use crate::dialog::NativeDialog;
use crate::error::PickerError;
use crate::materialize::{CopyStrategy, SandboxDirs};
use crate::models::{DirectoryPickerResponse, PickedItem, PickerOptions};
use crate::picker::DocumentPicker;
use futures::future::AbortRegistration;

/// OS identifiers served by the generic adapter.
pub const GENERIC_OS_NAMES: &[&str] = &["ios", "android", "windows", "macos", "linux", "web"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    Generic,
    Harmony,
}

impl AdapterKind {
    /// Pick the adapter for an OS identifier (case-insensitive).
    pub fn for_os(os_name: &str) -> Self {
        let os_name = os_name.trim().to_ascii_lowercase();
        if GENERIC_OS_NAMES.contains(&os_name.as_str()) {
            AdapterKind::Generic
        } else {
            AdapterKind::Harmony
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AdapterKind::Generic => "generic",
            AdapterKind::Harmony => "harmony",
        }
    }
}

/// OS identifier of the running build.
///
/// OpenHarmony targets report `target_os = "linux"`, so the target environment
/// decides first.
pub fn current_os_name() -> &'static str {
    if cfg!(target_env = "ohos") {
        "ohos"
    } else {
        std::env::consts::OS
    }
}

/// The picker implementation chosen for a platform.
#[derive(Debug)]
pub enum PickerAdapter<D> {
    Generic(DocumentPicker<D>),
    Harmony(DocumentPicker<D>),
}

impl<D: NativeDialog> PickerAdapter<D> {
    pub fn for_kind(kind: AdapterKind, dialog: D, dirs: SandboxDirs) -> Self {
        match kind {
            AdapterKind::Generic => PickerAdapter::Generic(generic::picker(dialog, dirs)),
            AdapterKind::Harmony => PickerAdapter::Harmony(harmony::picker(dialog, dirs)),
        }
    }

    /// Adapter for the given OS identifier.
    pub fn for_os(os_name: &str, dialog: D, dirs: SandboxDirs) -> Self {
        let kind = AdapterKind::for_os(os_name);
        log::debug!("using {} picker adapter for {os_name}", kind.name());
        Self::for_kind(kind, dialog, dirs)
    }

    /// Adapter for the running build.
    pub fn for_current_os(dialog: D, dirs: SandboxDirs) -> Self {
        Self::for_os(current_os_name(), dialog, dirs)
    }

    pub fn kind(&self) -> AdapterKind {
        match self {
            PickerAdapter::Generic(_) => AdapterKind::Generic,
            PickerAdapter::Harmony(_) => AdapterKind::Harmony,
        }
    }

    pub fn picker(&self) -> &DocumentPicker<D> {
        match self {
            PickerAdapter::Generic(picker) | PickerAdapter::Harmony(picker) => picker,
        }
    }

    /// Override the chunk size of streamed copies. Native copies are unaffected.
    pub fn with_chunk_size(self, chunk_size: usize) -> Self {
        let apply = |picker: DocumentPicker<D>| match picker.copy_strategy() {
            CopyStrategy::Streamed { .. } => {
                picker.with_copy_strategy(CopyStrategy::Streamed { chunk_size })
            }
            CopyStrategy::Native => picker,
        };
        match self {
            PickerAdapter::Generic(picker) => PickerAdapter::Generic(apply(picker)),
            PickerAdapter::Harmony(picker) => PickerAdapter::Harmony(apply(picker)),
        }
    }

    pub async fn pick(&self, options: &PickerOptions) -> Result<Vec<PickedItem>, PickerError> {
        self.picker().pick(options).await
    }

    pub async fn pick_abortable(
        &self,
        options: &PickerOptions,
        registration: AbortRegistration,
    ) -> Result<Vec<PickedItem>, PickerError> {
        self.picker().pick_abortable(options, registration).await
    }

    pub async fn pick_directory(&self) -> Result<DirectoryPickerResponse, PickerError> {
        self.picker().pick_directory().await
    }

    pub async fn release_secure_access(&self, uris: &[String]) -> Result<(), PickerError> {
        self.picker().release_secure_access(uris).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::ReleasePolicy;
    use crate::tests::ScriptedDialog;
    use rstest::rstest;

    fn dirs() -> SandboxDirs {
        SandboxDirs::new("/sandbox/cache", "/sandbox/files")
    }

    #[rstest]
    #[case("ios", AdapterKind::Generic)]
    #[case("android", AdapterKind::Generic)]
    #[case("windows", AdapterKind::Generic)]
    #[case("macos", AdapterKind::Generic)]
    #[case("linux", AdapterKind::Generic)]
    #[case("web", AdapterKind::Generic)]
    #[case("MacOS", AdapterKind::Generic)]
    #[case("harmony", AdapterKind::Harmony)]
    #[case("ohos", AdapterKind::Harmony)]
    #[case("openharmony", AdapterKind::Harmony)]
    #[case("", AdapterKind::Harmony)]
    fn test_adapter_kind_for_os(#[case] os_name: &str, #[case] expected: AdapterKind) {
        assert_eq!(AdapterKind::for_os(os_name), expected);
    }

    #[test]
    fn test_profiles_differ_per_platform() {
        let generic = PickerAdapter::for_os("ios", ScriptedDialog::returning(Vec::new()), dirs());
        assert_eq!(generic.kind(), AdapterKind::Generic);
        assert_eq!(generic.picker().copy_strategy(), CopyStrategy::Native);
        assert_eq!(
            generic.picker().release_policy(),
            ReleasePolicy::DelegateToDialog
        );

        let harmony = PickerAdapter::for_os("ohos", ScriptedDialog::returning(Vec::new()), dirs());
        assert_eq!(harmony.kind(), AdapterKind::Harmony);
        assert_eq!(
            harmony.picker().copy_strategy(),
            CopyStrategy::Streamed { chunk_size: 4096 }
        );
        assert_eq!(harmony.picker().release_policy(), ReleasePolicy::NotRequired);
    }

    #[test]
    fn test_chunk_size_override_only_touches_streamed_copies() {
        let harmony = PickerAdapter::for_kind(
            AdapterKind::Harmony,
            ScriptedDialog::returning(Vec::new()),
            dirs(),
        )
        .with_chunk_size(65536);
        assert_eq!(
            harmony.picker().copy_strategy(),
            CopyStrategy::Streamed { chunk_size: 65536 }
        );

        let generic = PickerAdapter::for_kind(
            AdapterKind::Generic,
            ScriptedDialog::returning(Vec::new()),
            dirs(),
        )
        .with_chunk_size(65536);
        assert_eq!(generic.picker().copy_strategy(), CopyStrategy::Native);
    }

    #[test]
    fn test_current_os_name_is_known() {
        let name = current_os_name();
        assert!(!name.is_empty());
        if cfg!(target_env = "ohos") {
            assert_eq!(AdapterKind::for_os(name), AdapterKind::Harmony);
        }
    }
}
