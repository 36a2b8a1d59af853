use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn linked<'a>(text: &'a str, terminator: Option<&str>) -> Option<(&'a str, bool)> {
    match_uri(text.as_bytes(), terminator.map(str::as_bytes))
        .map(|m| (&text[..m.len], m.terminated))
}

// === Scheme ===

#[test]
fn plain_http_link() {
    assert_eq!(
        linked("http://example.com rest", None),
        Some(("http://example.com", false))
    );
}

#[test]
fn scheme_allows_plus_dot_dash() {
    assert_eq!(
        linked("svn+ssh://host/repo", None),
        Some(("svn+ssh://host/repo", false))
    );
}

#[test]
fn scheme_must_start_with_letter() {
    assert_eq!(linked("1http://example.com", None), None);
    assert_eq!(linked("://example.com", None), None);
}

#[test]
fn overlong_scheme_is_rejected() {
    let text = format!("{}://host", "a".repeat(MAX_SCHEME_LEN + 1));
    assert_eq!(linked(&text, None), None);
    let text = format!("{}://host", "a".repeat(MAX_SCHEME_LEN));
    assert!(linked(&text, None).is_some());
}

#[test]
fn empty_body_is_not_a_link() {
    assert_eq!(linked("http://", None), None);
    assert_eq!(linked("http:// x", None), None);
    assert_eq!(linked("http://.", None), None);
}

// === Trailing punctuation ===

#[test]
fn sentence_punctuation_is_trimmed() {
    assert_eq!(
        linked("http://example.com/a.", None),
        Some(("http://example.com/a", false))
    );
    assert_eq!(
        linked("https://x.org/p?q=1);", None),
        Some(("https://x.org/p?q=1", false))
    );
}

#[test]
fn query_and_fragment_are_kept() {
    assert_eq!(
        linked("https://x.org/p?q=1&r=%20#frag\n", None),
        Some(("https://x.org/p?q=1&r=%20#frag", false))
    );
}

// === Terminators ===

#[test]
fn block_comment_closer_cuts_the_link() {
    assert_eq!(
        linked("http://example.com/*/ tail", Some("*/")),
        Some(("http://example.com/", true))
    );
}

#[test]
fn apostrophe_cuts_the_link_in_strings() {
    assert_eq!(
        linked("http://example.com/a'", Some("'")),
        Some(("http://example.com/a", true))
    );
}

#[test]
fn terminator_absent_from_match_is_ignored() {
    assert_eq!(
        linked("http://example.com \"", Some("\"")),
        Some(("http://example.com", false))
    );
}

#[test]
fn terminator_hint_dropped_when_punctuation_was_trimmed() {
    assert_eq!(
        linked("http://example.com.'", Some("'")),
        Some(("http://example.com", false))
    );
}

#[test]
fn terminator_right_after_separator_leaves_nothing() {
    assert_eq!(linked("http://'", Some("'")), None);
}

// === Boundaries ===

#[test]
fn boundary_requires_non_alphanumeric_prev() {
    assert!(is_boundary(0));
    assert!(is_boundary(b' '));
    assert!(is_boundary(b'('));
    assert!(!is_boundary(b'x'));
    assert!(!is_boundary(b'7'));
}

proptest! {
    #[test]
    fn match_stays_in_bounds(s in "[a-z:/.'*]{0,40}") {
        if let Some(m) = match_uri(s.as_bytes(), Some(b"*/")) {
            prop_assert!(m.len <= s.len());
            prop_assert!(s[..m.len].contains("://"));
            prop_assert!(!s[..m.len].contains("*/"));
        }
    }
}
