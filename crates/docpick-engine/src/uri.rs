//! Conversions between `file://` URIs handed out by picker dialogs and local paths.
//!
//! HarmonyOS hands out URIs of the form `file://<bundle>/<path>`, desktop and the
//! other mobile platforms use `file:///<path>`. In both cases the authority is
//! dropped and the remaining path is percent-decoded.

use crate::error::PickerError;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// Resolve a picker URI to a local filesystem path.
pub fn uri_to_path(uri: &str) -> Result<PathBuf, PickerError> {
    let encoded_path = if let Some(rest) = uri.strip_prefix(FILE_SCHEME) {
        match rest.find('/') {
            Some(index) => &rest[index..],
            None => return Err(PickerError::InvalidUri(uri.to_string())),
        }
    } else if uri.starts_with('/') {
        uri
    } else {
        return Err(PickerError::InvalidUri(uri.to_string()));
    };

    let decoded =
        urlencoding::decode(encoded_path).map_err(|_| PickerError::InvalidUri(uri.to_string()))?;
    Ok(PathBuf::from(strip_drive_prefix(&decoded)))
}

/// Last path segment of a URI, percent-decoded.
///
/// `None` when the URI ends in `/` or the decoded segment is not a plain file name
/// (see [`plain_file_name`]).
pub fn file_name_from_uri(uri: &str) -> Option<String> {
    let segment = uri.rsplit('/').next().unwrap_or(uri);
    let decoded = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    plain_file_name(&decoded).map(str::to_string)
}

/// `name` if it names a single entry inside a directory.
///
/// Empty names, `.`, `..` and anything holding a path separator are rejected, so
/// joining the result onto a directory never leaves that directory.
pub fn plain_file_name(name: &str) -> Option<&str> {
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    if name.contains(|c: char| c == '/' || c == '\\') {
        return None;
    }
    Some(name)
}

/// Build a `file://` URI for a local path, percent-encoding each segment.
pub fn path_to_uri(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let encoded = raw
        .split('/')
        .map(|segment| {
            // Keep Windows drive letters readable
            if segment.len() == 2 && segment.ends_with(':') {
                segment.to_string()
            } else {
                urlencoding::encode(segment).into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    if encoded.starts_with('/') {
        format!("{FILE_SCHEME}{encoded}")
    } else {
        format!("{FILE_SCHEME}/{encoded}")
    }
}

#[cfg(windows)]
fn strip_drive_prefix(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':'
    {
        &path[1..]
    } else {
        path
    }
}

#[cfg(not(windows))]
fn strip_drive_prefix(path: &str) -> &str {
    path
}
