//! File-id extraction from Drive/Sheets share links.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Regex pattern for path-style links (`.../d/<id>/...`).
#[allow(clippy::expect_used)]
static PATH_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("path-id regex is valid") // Static pattern, safe to panic
});

/// Regex pattern for query-style links (`...?id=<id>`).
#[allow(clippy::expect_used)]
static QUERY_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"id=([a-zA-Z0-9_-]+)").expect("query-id regex is valid") // Static pattern, safe to panic
});

/// Extracts the file identifier from a share link.
///
/// Two recognition patterns are tried in fixed priority order: the
/// path-style `/d/<id>` segment first, then the query-style `id=<id>`
/// parameter. The first match wins even when both are present. Returns
/// `None` when neither pattern matches (including the empty string).
///
/// This is a pure function; it never fails beyond a non-match.
///
/// # Examples
///
/// ```
/// use sheet_harvester::parser::extract_file_id;
///
/// let id = extract_file_id("https://docs.google.com/spreadsheets/d/ABC123/edit");
/// assert_eq!(id.as_deref(), Some("ABC123"));
/// ```
#[must_use]
pub fn extract_file_id(link: &str) -> Option<String> {
    let id = capture_id(&PATH_ID_PATTERN, link).or_else(|| capture_id(&QUERY_ID_PATTERN, link));
    trace!(link, id = ?id, "file id extraction");
    id
}

fn capture_id(pattern: &Regex, link: &str) -> Option<String> {
    pattern
        .captures(link)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ==================== Path-Style Links ====================

    #[test]
    fn test_extract_file_id_from_sheets_edit_link() {
        let id = extract_file_id("https://docs.google.com/spreadsheets/d/ABC123/edit");
        assert_eq!(id.as_deref(), Some("ABC123"));
    }

    #[test]
    fn test_extract_file_id_from_drive_file_link() {
        let id = extract_file_id("https://drive.google.com/file/d/1aB_c-D2eF/view?usp=sharing");
        assert_eq!(id.as_deref(), Some("1aB_c-D2eF"));
    }

    #[test]
    fn test_extract_file_id_allows_hyphen_and_underscore() {
        let id = extract_file_id("https://docs.google.com/spreadsheets/d/a-b_c/edit");
        assert_eq!(id.as_deref(), Some("a-b_c"));
    }

    // ==================== Query-Style Links ====================

    #[test]
    fn test_extract_file_id_from_open_link() {
        let id = extract_file_id("https://drive.google.com/open?id=XYZ789");
        assert_eq!(id.as_deref(), Some("XYZ789"));
    }

    #[test]
    fn test_extract_file_id_query_param_mid_string() {
        let id = extract_file_id("https://drive.google.com/uc?export=download&id=QRS456");
        assert_eq!(id.as_deref(), Some("QRS456"));
    }

    // ==================== Priority Order ====================

    #[test]
    fn test_path_pattern_takes_precedence_over_query() {
        let id = extract_file_id("https://docs.google.com/spreadsheets/d/PATHID/edit?id=QUERYID");
        assert_eq!(id.as_deref(), Some("PATHID"));
    }

    // ==================== Non-Matches ====================

    #[test]
    fn test_extract_file_id_no_pattern_returns_none() {
        assert!(extract_file_id("https://example.com/some/page").is_none());
    }

    #[test]
    fn test_extract_file_id_plain_text_returns_none() {
        assert!(extract_file_id("not a link at all").is_none());
    }

    #[test]
    fn test_extract_file_id_empty_string_returns_none() {
        assert!(extract_file_id("").is_none());
    }
}
