use serde::{Deserialize, Deserializer, Serialize};

/// Sandbox directory a picked file should be copied into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CopyDestination {
    /// App cache directory, may be purged by the OS
    CachesDirectory,
    /// Persistent app document directory
    DocumentDirectory,
}

/// Options for a single `pick` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    /// Extension groups, each possibly holding several whitespace-separated extensions
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_type_groups",
        skip_serializing_if = "Option::is_none"
    )]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub allow_multi_selection: bool,
    #[serde(default)]
    pub copy_to: Option<CopyDestination>,
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn multiple(mut self, allow: bool) -> Self {
        self.allow_multi_selection = allow;
        self
    }

    pub fn copy_to(mut self, destination: CopyDestination) -> Self {
        self.copy_to = Some(destination);
        self
    }
}

/// A `type` value that is not a list of strings is treated as absent.
fn deserialize_type_groups<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TypeGroups {
        List(Vec<String>),
        Other(serde::de::IgnoredAny),
    }

    Ok(match TypeGroups::deserialize(deserializer)? {
        TypeGroups::List(groups) => Some(groups),
        TypeGroups::Other(_) => None,
    })
}

/// One picked file, translated into the cross-platform shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPickerResponse {
    pub uri: String,
    /// Content type guessed from the extension, `None` when unknown
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    /// Display name, empty when the URI doesn't carry a usable one
    pub name: String,
    pub size: u64,
    pub file_copy_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPickerResponse {
    pub uri: String,
}

/// A picked entry whose metadata could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub uri: String,
    pub reason: String,
}

/// Outcome of one selected slot, in dialog order.
pub type PickedItem = Result<DocumentPickerResponse, ItemFailure>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_options_from_host_json() {
        let json = r#"{"type":[".png",".jpg .jpeg"],"allowMultiSelection":true,"copyTo":"cachesDirectory"}"#;
        let options: PickerOptions = serde_json::from_str(json).unwrap();

        assert_eq!(
            options,
            PickerOptions::new()
                .with_types([".png", ".jpg .jpeg"])
                .multiple(true)
                .copy_to(CopyDestination::CachesDirectory)
        );
    }

    #[test]
    fn test_non_list_type_is_treated_as_absent() {
        let options: PickerOptions = serde_json::from_str(r#"{"type":"image/*"}"#).unwrap();
        assert_eq!(options.types, None);

        let options: PickerOptions = serde_json::from_str(r#"{"type":null}"#).unwrap();
        assert_eq!(options.types, None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let options: PickerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, PickerOptions::default());
        assert!(!options.allow_multi_selection);
    }

    #[test]
    fn test_response_serializes_in_host_shape() {
        let response = DocumentPickerResponse {
            uri: "file://docs/storage/a.txt".to_string(),
            content_type: Some("text/plain".to_string()),
            name: "a.txt".to_string(),
            size: 3,
            file_copy_uri: None,
            copy_error: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "uri": "file://docs/storage/a.txt",
                "type": "text/plain",
                "name": "a.txt",
                "size": 3,
                "fileCopyUri": null
            })
        );
    }
}
