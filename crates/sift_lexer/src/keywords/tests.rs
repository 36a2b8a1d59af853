use super::*;

#[test]
fn lookup_ignores_case() {
    let set = KeywordSet::new(["select", "FROM"]);
    assert!(set.contains("select"));
    assert!(set.contains("SELECT"));
    assert!(set.contains("SeLeCt"));
    assert!(set.contains("from"));
    assert!(set.contains("From"));
    assert!(!set.contains("selects"));
    assert!(!set.contains("sel"));
}

#[test]
fn empty_set_matches_nothing() {
    let set = KeywordSet::empty();
    assert!(set.is_empty());
    assert!(!set.contains("select"));
    assert!(!set.contains(""));
}

#[test]
fn long_identifiers_are_rejected_without_lookup() {
    let set = KeywordSet::new(["as"]);
    assert!(!set.contains(&"a".repeat(1000)));
}

#[test]
fn identifiers_longer_than_inline_buffer_still_match() {
    let long = "k".repeat(40);
    let set = KeywordSet::new([long.as_str()]);
    assert!(set.contains(&long.to_ascii_uppercase()));
}

#[test]
fn blank_entries_are_skipped() {
    let set = KeywordSet::new(["", "  ", "begin"]);
    assert_eq!(set.len(), 1);
}

#[test]
fn duplicates_collapse() {
    let set: KeywordSet = ["end", "END", "End"].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn parse_list_handles_separators_and_comments() {
    let set = KeywordSet::parse_list(
        "# SQL:2003 subset\nselect, from where\n\tgroup,by # trailing note\n\n",
    );
    assert_eq!(set.len(), 5);
    for word in ["select", "from", "where", "group", "by"] {
        assert!(set.contains(word), "{word}");
    }
    assert!(!set.contains("trailing"));
    assert!(!set.contains("sql"));
}
