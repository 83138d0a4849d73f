use crate::parsing::inline::state::InlineParserState;

/// Catch-all: any char not claimed by another rule is plain text.
pub struct Text;

impl Text {
    pub fn matches(state: &InlineParserState<'_>) -> bool {
        !state.cursor.eof()
    }

    pub fn execute(state: &mut InlineParserState<'_>) {
        let start = state.cursor.pos();
        if let Some(c) = state.cursor.bump() {
            state.push_text(c, start);
        }
    }
}
