use crate::parsing::inline::{state::InlineParserState, types::Marker};

/// Emphasis, delimited by a single `*`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "*";

    /// A `*` not starting a `**` pair.
    pub fn matches(state: &InlineParserState<'_>) -> bool {
        state.cursor.starts_with(Self::DELIMITER)
            && !state.cursor.starts_with(super::Strong::DELIMITER)
    }

    pub fn execute(state: &mut InlineParserState<'_>) {
        state.toggle(Marker::Emphasis);
    }
}
