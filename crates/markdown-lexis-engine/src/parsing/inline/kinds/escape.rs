use crate::parsing::inline::state::InlineParserState;

/// Backslash escape: `\*` yields a literal `*`.
pub struct Escape;

impl Escape {
    pub const PREFIX: char = '\\';

    /// Characters a backslash turns into literals.
    pub const ESCAPABLE: &'static [char] = &[
        '*', '_', '~', '`', '\\', '[', ']', '(', ')', '#', '+', '-', '.', '!', '|',
    ];

    pub fn is_escapable(c: char) -> bool {
        Self::ESCAPABLE.contains(&c)
    }

    /// A backslash followed by any char. A trailing lone backslash is left
    /// to the text rule.
    pub fn matches(state: &InlineParserState<'_>) -> bool {
        state.cursor.peek() == Some(Self::PREFIX) && state.cursor.peek_second().is_some()
    }

    pub fn execute(state: &mut InlineParserState<'_>) {
        let start = state.cursor.pos();
        state.cursor.bump();
        let Some(next) = state.cursor.bump() else {
            state.push_text(Self::PREFIX, start);
            return;
        };
        if !Self::is_escapable(next) {
            state.push_text(Self::PREFIX, start);
        }
        state.push_text(next, start);
    }
}
