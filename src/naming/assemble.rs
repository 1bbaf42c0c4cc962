use crate::consts::{KEYWORD_DELIMITER, SEPARATOR};

/// Split a comma-separated keyword list, trimming each entry and dropping
/// blanks. Content is otherwise taken verbatim.
pub(crate) fn split_keywords(inputs: &str) -> Vec<String> {
    inputs
        .split(KEYWORD_DELIMITER)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trimmed suffix, or an empty string when absent or blank
pub(crate) fn normalize_suffix(suffix: Option<&str>) -> String {
    suffix.map(str::trim).unwrap_or_default().to_string()
}

/// Join prefix, keywords, and a non-empty suffix with `-`.
pub(crate) fn assemble<S: AsRef<str>>(prefix: &str, keywords: &[S], suffix: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(keywords.len() + 2);
    parts.push(prefix);
    parts.extend(keywords.iter().map(AsRef::as_ref));
    if !suffix.is_empty() {
        parts.push(suffix);
    }
    parts.join(SEPARATOR)
}
