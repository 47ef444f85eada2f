//! Allow-list sanitizer for free-text fields
//!
//! Applied before persisting any applicant- or member-supplied prose.
//! Strips markup, replaces quote/control/SQL-meta characters with spaces,
//! trims, and caps the length. The database layer is fully parameterized;
//! this is defense-in-depth against noisy payloads, mirroring the original
//! request scanner's token set.

use std::sync::OnceLock;

use regex::Regex;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

/// Sanitize a free-text value. `None` stays `None`; otherwise the cleaned,
/// trimmed, length-capped string is returned (possibly empty).
#[must_use]
pub fn sanitize_text(input: Option<&str>, max: usize) -> Option<String> {
    let input = input?;

    let mut s = tag_re().replace_all(input, "").into_owned();

    s = s
        .chars()
        .map(|c| match c {
            '\0' | '\x08' | '\t' | '\x1a' | '\n' | '\r' | '"' | '\'' | '\\' | ';' => ' ',
            _ => c,
        })
        .collect();

    // SQL comment/delimiter tokens
    s = s.replace("--", " ");
    s = s.replace("/*", " ").replace("*/", " ");

    let mut s = s.trim().to_string();
    if s.chars().count() > max {
        s = s.chars().take(max).collect();
    }

    Some(s)
}

/// Sanitize a required free-text value, treating `None` as empty
#[must_use]
pub fn sanitize_required(input: &str, max: usize) -> String {
    sanitize_text(Some(input), max).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_passes_through() {
        assert_eq!(sanitize_text(None, 100), None);
    }

    #[test]
    fn test_strips_markup() {
        assert_eq!(
            sanitize_text(Some("hello <b>world</b><script>alert(1)</script>"), 100),
            Some("hello worldalert(1)".to_string())
        );
    }

    #[test]
    fn test_replaces_quotes_and_control_chars() {
        assert_eq!(
            sanitize_text(Some("it's \"quoted\"\nnext"), 100),
            Some("it s  quoted  next".to_string())
        );
    }

    #[test]
    fn test_removes_sql_tokens() {
        let cleaned = sanitize_text(Some("x; DROP TABLE users; -- gotcha /* hm */"), 100).unwrap();
        assert!(!cleaned.contains(';'));
        assert!(!cleaned.contains("--"));
        assert!(!cleaned.contains("/*"));
    }

    #[test]
    fn test_length_cap() {
        let long = "a".repeat(50);
        assert_eq!(sanitize_text(Some(&long), 10), Some("a".repeat(10)));
    }

    #[test]
    fn test_trims() {
        assert_eq!(sanitize_text(Some("   padded   "), 100), Some("padded".to_string()));
    }

    #[test]
    fn test_required_helper() {
        assert_eq!(sanitize_required("<i>ok</i>", 100), "ok");
    }
}
