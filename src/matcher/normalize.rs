/// Normalize text for comparison: lowercase, with whitespace, hyphens,
/// underscores and dots removed.
///
/// `"Node.js"` and `"node js"` both become `"nodejs"`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '_' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Substring containment in either direction. Empty strings never match.
pub fn overlaps(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize("Backend Developer"), "backenddeveloper");
        assert_eq!(normalize(" Node.js "), "nodejs");
        assert_eq!(normalize("QA_Automation-Engineer"), "qaautomationengineer");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_overlaps_both_directions() {
        assert!(overlaps("springboot", "spring"));
        assert!(overlaps("sql", "postgresql"));
        assert!(!overlaps("java", ""));
        assert!(!overlaps("", ""));
        assert!(!overlaps("react", "vue"));
    }
}
