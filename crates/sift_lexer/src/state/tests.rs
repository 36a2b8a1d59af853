use super::*;

// === StateStack ===

#[test]
fn new_stack_is_initial() {
    let stack = StateStack::new();
    assert_eq!(stack.active(), LexState::Initial);
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.top().entered_at, 0);
}

#[test]
fn push_then_pop_restores_previous_state() {
    let mut stack = StateStack::new();
    stack.push(LexState::InString, 7);
    assert_eq!(stack.active(), LexState::InString);
    assert_eq!(stack.top().entered_at, 7);

    let popped = stack.pop();
    assert_eq!(
        popped,
        Some(StateFrame {
            state: LexState::InString,
            entered_at: 7
        })
    );
    assert_eq!(stack.active(), LexState::Initial);
}

#[test]
fn frames_are_bottom_first() {
    let mut stack = StateStack::new();
    stack.push(LexState::InBlockComment, 3);
    stack.push(LexState::InString, 9);
    let states: Vec<LexState> = stack.frames().iter().map(|f| f.state).collect();
    assert_eq!(
        states,
        vec![
            LexState::Initial,
            LexState::InBlockComment,
            LexState::InString
        ]
    );
}

#[test]
fn reset_keeps_only_initial() {
    let mut stack = StateStack::new();
    stack.push(LexState::InLineComment, 1);
    stack.push(LexState::InString, 2);
    stack.reset();
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.active(), LexState::Initial);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "Initial frame")]
fn popping_initial_asserts_in_debug() {
    let mut stack = StateStack::new();
    let _ = stack.pop();
}

// === CommentDepth ===

#[test]
fn only_outermost_transitions_report() {
    let mut depth = CommentDepth::default();
    assert!(depth.open());
    assert!(!depth.open());
    assert_eq!(depth.get(), 2);
    assert!(!depth.close());
    assert!(depth.close());
    assert_eq!(depth.get(), 0);
}

#[test]
fn stray_closer_saturates_at_zero() {
    let mut depth = CommentDepth::default();
    assert!(!depth.close());
    assert_eq!(depth.get(), 0);
    assert!(depth.open());
}

#[test]
fn reset_clears_depth() {
    let mut depth = CommentDepth::default();
    depth.open();
    depth.open();
    depth.reset();
    assert_eq!(depth.get(), 0);
}

// === LexState ===

#[test]
fn labels_follow_context() {
    assert_eq!(LexState::Initial.label(), None);
    assert_eq!(LexState::InString.label(), Some(SpanLabel::String));
    assert_eq!(LexState::InQuotedIdentifier.label(), Some(SpanLabel::String));
    assert_eq!(LexState::InLineComment.label(), Some(SpanLabel::Comment));
    assert_eq!(LexState::InBlockComment.label(), Some(SpanLabel::Comment));
}

#[test]
fn only_closable_states_need_closer() {
    assert!(!LexState::Initial.needs_closer());
    assert!(!LexState::InLineComment.needs_closer());
    assert!(LexState::InString.needs_closer());
    assert!(LexState::InQuotedIdentifier.needs_closer());
    assert!(LexState::InBlockComment.needs_closer());
}

#[test]
fn uri_terminators() {
    assert_eq!(LexState::InString.uri_terminator(), Some("'"));
    assert_eq!(LexState::InBlockComment.uri_terminator(), Some("*/"));
    assert_eq!(LexState::InQuotedIdentifier.uri_terminator(), None);
    assert_eq!(LexState::InLineComment.uri_terminator(), None);
}
