use crate::error::PickerError;
use crate::mime::content_type_for_name;
use crate::models::DocumentPickerResponse;
use crate::uri::{file_name_from_uri, uri_to_path};
use std::fs;
use std::path::PathBuf;

/// Metadata of a picked file together with its local path.
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub response: DocumentPickerResponse,
}

/// Resolve size, display name and content type for a picked URI.
pub fn resolve_metadata(uri: &str) -> Result<ResolvedFile, PickerError> {
    let path = uri_to_path(uri)?;
    let size = match fs::metadata(&path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PickerError::NotFound(path));
        }
        Err(e) => return Err(PickerError::Io(e)),
    };

    let name = file_name_from_uri(uri).unwrap_or_default();
    let content_type = content_type_for_name(&name);

    Ok(ResolvedFile {
        path,
        response: DocumentPickerResponse {
            uri: uri.to_string(),
            content_type,
            name,
            size,
            file_copy_uri: None,
            copy_error: None,
        },
    })
}
