use crate::parsing::inline::{state::InlineParserState, types::Marker};

/// Strong emphasis, delimited by `**`.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";

    pub fn matches(state: &InlineParserState<'_>) -> bool {
        state.cursor.starts_with(Self::DELIMITER)
    }

    pub fn execute(state: &mut InlineParserState<'_>) {
        state.toggle(Marker::Strong);
    }
}
