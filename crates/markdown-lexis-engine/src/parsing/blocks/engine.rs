use crate::parsing::{context::ParsingContext, token::Token};

use super::rule::BlockRule;

/// Ordered registry of block rules.
#[derive(Debug, Clone, Default)]
pub struct BlockEngine {
    rules: Vec<BlockRule>,
}

impl BlockEngine {
    /// An engine with no rules; every line is dropped.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        for rule in BlockRule::PRECEDENCE {
            engine.register(rule);
        }
        engine
    }

    /// Adds `rule`, keeping the registry in declared precedence order.
    /// Registering a rule twice has no effect.
    pub fn register(&mut self, rule: BlockRule) {
        if self.rules.contains(&rule) {
            return;
        }
        let at = self.rules.partition_point(|r| r.rank() < rule.rank());
        self.rules.insert(at, rule);
    }

    pub fn rules(&self) -> &[BlockRule] {
        &self.rules
    }

    /// Runs the first rule that claims `line` and reports which one it was.
    pub fn dispatch(
        &self,
        line: &str,
        ctx: &mut ParsingContext<'_>,
    ) -> Option<(BlockRule, Vec<Token>)> {
        let rule = self.rules.iter().copied().find(|r| r.matches(line, ctx))?;
        Some((rule, rule.execute(line, ctx)))
    }

    /// Like [`Self::dispatch`], returning only the tokens. A line no rule
    /// claims yields nothing.
    pub fn parse_line(&self, line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        self.dispatch(line, ctx)
            .map(|(_, tokens)| tokens)
            .unwrap_or_default()
    }
}
