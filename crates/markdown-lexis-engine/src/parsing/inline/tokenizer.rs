use crate::parsing::token::Token;

use super::{rule::InlineRule, state::InlineParserState};

/// Ordered registry of inline rules and the scan loop that drives them.
#[derive(Debug, Clone, Default)]
pub struct InlineTokenizer {
    rules: Vec<InlineRule>,
}

impl InlineTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_rules() -> Self {
        let mut tokenizer = Self::new();
        for rule in InlineRule::PRECEDENCE {
            tokenizer.register(rule);
        }
        tokenizer
    }

    /// Adds `rule` in declared precedence order; duplicates are ignored.
    pub fn register(&mut self, rule: InlineRule) {
        if self.rules.contains(&rule) {
            return;
        }
        let at = self.rules.partition_point(|r| r.rank() < rule.rank());
        self.rules.insert(at, rule);
    }

    pub fn rules(&self) -> &[InlineRule] {
        &self.rules
    }

    /// Tokenizes `content` in a single left-to-right pass.
    ///
    /// The result never contains an open marker without its close: markers
    /// left open at the end are turned back into text.
    pub fn tokenize(&self, content: &str) -> Vec<Token> {
        let mut state = InlineParserState::new(content);
        while !state.cursor.eof() {
            match self.rules.iter().find(|r| r.matches(&state)) {
                Some(rule) => rule.execute(&mut state),
                None => {
                    let start = state.cursor.pos();
                    if let Some(c) = state.cursor.bump() {
                        state.push_text(c, start);
                    }
                }
            }
        }
        state.finish()
    }
}
