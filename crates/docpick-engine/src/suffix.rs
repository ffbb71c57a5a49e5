/// Flatten extension groups such as `[".jpeg .jpg", ".png"]` into individual tokens.
///
/// Order is preserved and duplicates are kept. Absent input yields an empty list.
pub fn normalize_suffixes<S: AsRef<str>>(groups: Option<&[S]>) -> Vec<String> {
    groups
        .unwrap_or_default()
        .iter()
        .flat_map(|group| group.as_ref().split_whitespace())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_splits_groups_in_order() {
        let groups = [".jpeg .jpg .png", ".txt"];
        let suffixes = normalize_suffixes(Some(&groups[..]));
        assert_eq!(suffixes, vec![".jpeg", ".jpg", ".png", ".txt"]);
    }

    #[test]
    fn test_absent_input_is_empty() {
        assert!(normalize_suffixes::<String>(None).is_empty());
    }

    #[test]
    fn test_empty_and_blank_groups_contribute_nothing() {
        let groups = vec!["".to_string(), "   ".to_string(), ".pdf".to_string()];
        assert_eq!(normalize_suffixes(Some(&groups[..])), vec![".pdf"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let groups = [".png", ".png .jpg"];
        assert_eq!(
            normalize_suffixes(Some(&groups[..])),
            vec![".png", ".png", ".jpg"]
        );
    }

    #[test]
    fn test_length_matches_token_count() {
        let groups = [" .a\t.b  .c ", ".d", "\n.e .f\n"];
        let expected: usize = groups.iter().map(|g| g.split_whitespace().count()).sum();
        assert_eq!(normalize_suffixes(Some(&groups[..])).len(), expected);
        assert_eq!(expected, 6);
    }
}
