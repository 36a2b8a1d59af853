//! Lexical states, the state stack and the block-comment depth counter.
//!
//! The stack answers "which rule set is active"; the depth counter answers
//! "how many block-comment openers are still unmatched". Only the depth
//! crossing zero moves the stack, so `/* /* */ */` stays a single comment.

use smallvec::SmallVec;

use crate::SpanLabel;

/// Rule set selector. Exactly one state is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexState {
    /// Code.
    #[default]
    Initial,
    /// Inside `'...'`.
    InString,
    /// Inside `"..."`.
    InQuotedIdentifier,
    /// From `--` to the end of the line.
    InLineComment,
    /// Between the outermost `/*` and its matching `*/`.
    InBlockComment,
}

impl LexState {
    /// Highlight class rendered while this state is active.
    pub fn label(self) -> Option<SpanLabel> {
        match self {
            LexState::Initial => None,
            LexState::InString | LexState::InQuotedIdentifier => Some(SpanLabel::String),
            LexState::InLineComment | LexState::InBlockComment => Some(SpanLabel::Comment),
        }
    }

    /// Closing delimiter that may also occur inside a URI body.
    ///
    /// Used as the hyperlink terminator hint; `None` means the closer can
    /// never be part of a URI.
    pub fn uri_terminator(self) -> Option<&'static str> {
        match self {
            LexState::InString => Some("'"),
            LexState::InBlockComment => Some("*/"),
            LexState::Initial | LexState::InQuotedIdentifier | LexState::InLineComment => None,
        }
    }

    /// Whether reaching end of input in this state leaves a construct open.
    ///
    /// A line comment legitimately ends at end of file.
    pub fn needs_closer(self) -> bool {
        matches!(
            self,
            LexState::InString | LexState::InQuotedIdentifier | LexState::InBlockComment
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            LexState::Initial => "code",
            LexState::InString => "string literal",
            LexState::InQuotedIdentifier => "quoted identifier",
            LexState::InLineComment => "line comment",
            LexState::InBlockComment => "block comment",
        }
    }
}

/// A state together with the offset where it was entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateFrame {
    pub state: LexState,
    pub entered_at: u32,
}

const INITIAL_FRAME: StateFrame = StateFrame {
    state: LexState::Initial,
    entered_at: 0,
};

/// Push/pop stack of [`StateFrame`]s with `Initial` pinned at the bottom.
///
/// SQL contexts rarely nest more than one level, so the frames live inline.
#[derive(Clone, Debug)]
pub struct StateStack {
    frames: SmallVec<[StateFrame; 4]>,
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStack {
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(INITIAL_FRAME);
        Self { frames }
    }

    /// The state whose rules are currently matched.
    #[inline]
    pub fn active(&self) -> LexState {
        self.top().state
    }

    /// The active frame.
    pub fn top(&self) -> StateFrame {
        self.frames.last().copied().unwrap_or(INITIAL_FRAME)
    }

    /// Suspend the active state and activate `state`.
    pub fn push(&mut self, state: LexState, offset: u32) {
        self.frames.push(StateFrame {
            state,
            entered_at: offset,
        });
    }

    /// Discard the active frame and restore the one beneath it.
    ///
    /// Popping the `Initial` frame is a programming error: it asserts in
    /// debug builds and is ignored (returning `None`) in release builds.
    pub fn pop(&mut self) -> Option<StateFrame> {
        debug_assert!(self.frames.len() > 1, "attempted to pop the Initial frame");
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Number of frames, including `Initial`.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// All frames, bottom first.
    pub fn frames(&self) -> &[StateFrame] {
        &self.frames
    }

    /// Back to just `Initial`.
    pub fn reset(&mut self) {
        self.frames.truncate(1);
        if self.frames.is_empty() {
            self.frames.push(INITIAL_FRAME);
        }
    }
}

/// Nesting level of block comments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommentDepth(u32);

impl CommentDepth {
    /// Record an opener. Returns `true` on the 0 → 1 transition.
    pub fn open(&mut self) -> bool {
        self.0 += 1;
        self.0 == 1
    }

    /// Record a closer. Returns `true` on the 1 → 0 transition.
    ///
    /// A closer at depth 0 is ignored.
    pub fn close(&mut self) -> bool {
        match self.0 {
            0 => false,
            n => {
                self.0 = n - 1;
                self.0 == 0
            }
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests;
