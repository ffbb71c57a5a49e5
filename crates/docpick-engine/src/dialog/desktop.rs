//! Desktop dialog backed by the platform's native file chooser via `rfd`.

use super::{DialogConfig, DialogError, DialogFuture, DialogMode, NativeDialog};
use crate::uri::path_to_uri;

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopDialog;

impl NativeDialog for DesktopDialog {
    fn supports_mode_selection(&self) -> bool {
        true
    }

    fn open<'a>(
        &'a self,
        config: DialogConfig,
    ) -> DialogFuture<'a, Result<Vec<String>, DialogError>> {
        Box::pin(async move {
            let mut dialog = rfd::AsyncFileDialog::new();

            let handles = if config.mode == Some(DialogMode::Folder) {
                dialog.pick_folder().await.map(|handle| vec![handle])
            } else {
                let extensions = config.bare_extensions();
                if !extensions.is_empty() {
                    dialog = dialog.add_filter("Allowed files", &extensions[..]);
                }
                if config.max_selection == Some(1) {
                    dialog.pick_file().await.map(|handle| vec![handle])
                } else {
                    dialog.pick_files().await
                }
            };

            let uris = handles
                .unwrap_or_default()
                .iter()
                .map(|handle| path_to_uri(handle.path()))
                .collect::<Vec<_>>();
            log::debug!("desktop dialog returned {} entries", uris.len());
            Ok(uris)
        })
    }
}
