use std::collections::BTreeSet;

pub(crate) fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Normalized, de-duplicated, non-empty entries.
pub(crate) fn normalized_set<'a, I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    values
        .into_iter()
        .map(|value| normalize_text(value))
        .filter(|value| !value.is_empty())
        .collect()
}

/// First phrase that appears inside `haystack`; both sides already normalized.
pub(crate) fn find_contained<'a, I>(haystack: &str, phrases: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    if haystack.is_empty() {
        return None;
    }

    phrases
        .into_iter()
        .map(String::as_str)
        .find(|phrase| !phrase.is_empty() && haystack.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        let source = "\u{feff}Senior  Machine   Learning Engineer ";
        assert_eq!(normalize_text(source), "senior machine learning engineer");
    }

    #[test]
    fn normalized_set_drops_blanks_and_duplicates() {
        let values = vec![
            "Python".to_string(),
            " python ".to_string(),
            "   ".to_string(),
            "SQL".to_string(),
        ];
        let set = normalized_set(&values);
        assert_eq!(set.len(), 2);
        assert!(set.contains("python"));
        assert!(set.contains("sql"));
    }

    #[test]
    fn find_contained_matches_fragments() {
        let phrases = vec!["ai engineer".to_string(), "data scientist".to_string()];
        assert_eq!(
            find_contained("data & ai engineer", &phrases),
            Some("ai engineer")
        );
        assert_eq!(find_contained("backend developer", &phrases), None);
        assert_eq!(find_contained("", &phrases), None);
    }
}
