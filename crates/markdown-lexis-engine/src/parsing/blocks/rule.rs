use std::fmt;

use crate::parsing::{context::ParsingContext, token::Token};

use super::kinds::{
    BlockQuote, CodeFence, EmptyLine, Heading, HorizontalRule, List, Paragraph, Table,
};

/// The closed set of block rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockRule {
    EmptyLine,
    CodeFence,
    Table,
    Heading,
    List,
    HorizontalRule,
    BlockQuote,
    Paragraph,
}

impl BlockRule {
    /// Declared precedence, highest first. The engine tries rules in this
    /// order and the first match wins.
    pub const PRECEDENCE: [BlockRule; 8] = [
        BlockRule::EmptyLine,
        BlockRule::CodeFence,
        BlockRule::Table,
        BlockRule::Heading,
        BlockRule::List,
        BlockRule::HorizontalRule,
        BlockRule::BlockQuote,
        BlockRule::Paragraph,
    ];

    /// Position in [`Self::PRECEDENCE`]; lower runs first.
    pub fn rank(self) -> usize {
        Self::PRECEDENCE
            .iter()
            .position(|r| *r == self)
            .unwrap_or(Self::PRECEDENCE.len())
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockRule::EmptyLine => "empty_line",
            BlockRule::CodeFence => "code_fence",
            BlockRule::Table => "table",
            BlockRule::Heading => "heading",
            BlockRule::List => "list",
            BlockRule::HorizontalRule => "horizontal_rule",
            BlockRule::BlockQuote => "blockquote",
            BlockRule::Paragraph => "paragraph",
        }
    }

    /// Pure test of whether this rule claims `line`. Only the table rule
    /// looks past the current line.
    pub fn matches(self, line: &str, ctx: &ParsingContext<'_>) -> bool {
        match self {
            BlockRule::EmptyLine => EmptyLine::matches(line),
            BlockRule::CodeFence => CodeFence::matches(line),
            BlockRule::Table => Table::matches(line, ctx.peek_next_line()),
            BlockRule::Heading => Heading::matches(line),
            BlockRule::List => List::matches(line),
            BlockRule::HorizontalRule => HorizontalRule::matches(line),
            BlockRule::BlockQuote => BlockQuote::matches(line),
            BlockRule::Paragraph => Paragraph::matches(line),
        }
    }

    pub fn execute(self, line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        match self {
            BlockRule::EmptyLine => EmptyLine::execute(ctx),
            BlockRule::CodeFence => CodeFence::execute(line, ctx),
            BlockRule::Table => Table::execute(line, ctx),
            BlockRule::Heading => Heading::execute(line, ctx),
            BlockRule::List => List::execute(line, ctx),
            BlockRule::HorizontalRule => HorizontalRule::execute(line, ctx),
            BlockRule::BlockQuote => BlockQuote::execute(line, ctx),
            BlockRule::Paragraph => Paragraph::execute(line, ctx),
        }
    }
}

impl fmt::Display for BlockRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
