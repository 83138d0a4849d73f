use std::fmt;

use super::{
    kinds::{Emphasis, Escape, Strike, Strong, Text},
    state::InlineParserState,
};

/// The closed set of inline rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineRule {
    Escape,
    Strong,
    Emphasis,
    Strike,
    Text,
}

impl InlineRule {
    /// Declared precedence, highest first.
    pub const PRECEDENCE: [InlineRule; 5] = [
        InlineRule::Escape,
        InlineRule::Strong,
        InlineRule::Emphasis,
        InlineRule::Strike,
        InlineRule::Text,
    ];

    pub fn rank(self) -> usize {
        Self::PRECEDENCE
            .iter()
            .position(|r| *r == self)
            .unwrap_or(Self::PRECEDENCE.len())
    }

    pub fn name(self) -> &'static str {
        match self {
            InlineRule::Escape => "escape",
            InlineRule::Strong => "strong",
            InlineRule::Emphasis => "emphasis",
            InlineRule::Strike => "strike",
            InlineRule::Text => "text",
        }
    }

    pub fn matches(self, state: &InlineParserState<'_>) -> bool {
        match self {
            InlineRule::Escape => Escape::matches(state),
            InlineRule::Strong => Strong::matches(state),
            InlineRule::Emphasis => Emphasis::matches(state),
            InlineRule::Strike => Strike::matches(state),
            InlineRule::Text => Text::matches(state),
        }
    }

    /// Consumes input at the cursor. Every rule advances by at least one char.
    pub fn execute(self, state: &mut InlineParserState<'_>) {
        match self {
            InlineRule::Escape => Escape::execute(state),
            InlineRule::Strong => Strong::execute(state),
            InlineRule::Emphasis => Emphasis::execute(state),
            InlineRule::Strike => Strike::execute(state),
            InlineRule::Text => Text::execute(state),
        }
    }
}

impl fmt::Display for InlineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
