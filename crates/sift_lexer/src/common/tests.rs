use super::*;
use sift_lexer_core::SourceBuffer;

fn run_len(source: &str, stop: impl Fn(u8) -> bool, with_uris: bool) -> u32 {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    let mut probe = UriProbe::default();
    let uris = with_uris.then_some((&mut probe, None));
    eat_plain_run(&mut cursor, stop, uris);
    cursor.pos()
}

// === End of line ===

#[test]
fn end_of_line_takes_trailing_whitespace() {
    let buf = SourceBuffer::new("  \t\r\nx");
    let mut cursor = buf.cursor();
    assert!(eat_end_of_line(&mut cursor));
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn whitespace_without_terminator_is_not_end_of_line() {
    let buf = SourceBuffer::new("  x\n");
    let mut cursor = buf.cursor();
    assert!(!eat_end_of_line(&mut cursor));
    assert_eq!(cursor.pos(), 0);
}

// === Plain runs ===

#[test]
fn run_stops_at_stop_byte() {
    assert_eq!(run_len("abc'def", |b| b == b'\'', false), 3);
}

#[test]
fn run_always_takes_first_character() {
    assert_eq!(run_len("'abc", |b| b == b'\'', false), 4);
}

#[test]
fn run_stops_before_whitespace_that_ends_the_line() {
    assert_eq!(run_len("abc  \ndef", |_| false, false), 3);
    assert_eq!(run_len("abc  def\n", |_| false, false), 8);
}

#[test]
fn run_steps_over_multibyte_characters() {
    assert_eq!(run_len("héllo", |_| false, false), 6);
}

#[test]
fn run_stops_where_a_uri_begins() {
    assert_eq!(run_len("see http://x.org", |_| false, true), 4);
    // Without the overlay the whole text is one run.
    assert_eq!(run_len("see http://x.org", |_| false, false), 16);
}

#[test]
fn run_ignores_uri_inside_a_word() {
    assert_eq!(run_len("xhttp://x.org", |_| false, true), 13);
}

// === URI probe ===

#[test]
fn probe_matches_only_near_separator() {
    let buf = SourceBuffer::new("alpha beta http://x.org gamma");
    let mut cursor = buf.cursor();
    let mut probe = UriProbe::default();
    assert_eq!(probe.match_at(&cursor, None), None);
    cursor.advance_n(11);
    let found = probe.match_at(&cursor, None);
    assert_eq!(found.map(|m| m.len), Some(12));
    cursor.advance_n(13);
    assert_eq!(probe.match_at(&cursor, None), None);
}

#[test]
fn probe_finds_later_separators() {
    let buf = SourceBuffer::new("a://b c://d");
    let mut cursor = buf.cursor();
    let mut probe = UriProbe::default();
    assert!(probe.match_at(&cursor, None).is_some());
    cursor.advance_n(6);
    assert!(probe.match_at(&cursor, None).is_some());
}
