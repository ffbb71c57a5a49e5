/// Extension of a file name: everything after the last `.`.
///
/// Names without a dot, or ending in one, have an empty extension.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[index + 1..],
        None => "",
    }
}

/// Best-guess content type for an extension, `None` when the table has no entry.
pub fn content_type_for_extension(extension: &str) -> Option<String> {
    if extension.is_empty() {
        return None;
    }
    mime_guess::from_ext(extension)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

/// Content type guessed from a file name.
pub fn content_type_for_name(name: &str) -> Option<String> {
    content_type_for_extension(extension_of(name))
}
