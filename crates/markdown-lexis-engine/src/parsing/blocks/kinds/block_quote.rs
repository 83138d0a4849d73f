use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::closing,
    context::ParsingContext,
    span::Span,
    token::{Token, TokenKind},
};

/// Blockquote block type with owned delimiter constant.
///
/// The quote level is the number of leading `>` characters.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    fn regex() -> &'static Regex {
        static QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
        QUOTE_REGEX.get_or_init(|| Regex::new(r"^(>+)\s*(.*)$").expect("Invalid blockquote regex"))
    }

    pub fn matches(line: &str) -> bool {
        Self::regex().is_match(line)
    }

    /// Returns `(level, content)` for a quote line.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let caps = Self::regex().captures(line)?;
        let level = caps.get(1)?.as_str().len();
        Some((level, caps.get(2).map_or("", |m| m.as_str()).trim_end()))
    }

    pub fn execute(line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        let Some((level, content)) = Self::parse(line) else {
            return vec![];
        };
        let span = Span::line(ctx.current_line_index());

        let mut out = vec![];
        ctx.leave_heading();
        closing::close_paragraph(ctx, &mut out);
        closing::close_lists(ctx, &mut out);

        let continuing = ctx.quote_depth() == level && ctx.quote_has_content();

        while ctx.quote_depth() > level {
            if let Some(depth) = ctx.leave_quote_level() {
                out.push(
                    Token::close(TokenKind::Blockquote)
                        .with_level(depth)
                        .with_span(span),
                );
            }
        }
        while ctx.quote_depth() < level {
            let depth = ctx.enter_quote_level();
            out.push(
                Token::open(TokenKind::Blockquote)
                    .with_markup(Self::PREFIX.to_string())
                    .with_level(depth)
                    .with_span(span),
            );
        }

        if !content.is_empty() {
            if continuing {
                out.push(Token::soft_break().with_level(level).with_span(span));
            }
            out.push(Token::inline(content).with_level(level).with_span(span));
            ctx.mark_quote_content();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_counts_prefixes() {
        assert_eq!(BlockQuote::parse("> hello"), Some((1, "hello")));
        assert_eq!(BlockQuote::parse(">>nested"), Some((2, "nested")));
        assert_eq!(BlockQuote::parse(">"), Some((1, "")));
        assert_eq!(BlockQuote::parse("no quote"), None);
    }

    fn run(lines: &[&str]) -> Vec<Token> {
        let mut ctx = ParsingContext::new(lines);
        let mut out = vec![];
        for line in lines {
            out.extend(BlockQuote::execute(line, &mut ctx));
            ctx.advance();
        }
        closing::close_quotes(&mut ctx, &mut out);
        out
    }

    fn shape(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match (t.kind, t.nesting.delta()) {
                (TokenKind::Blockquote, 1) => format!("+q{}", t.level),
                (TokenKind::Blockquote, _) => format!("-q{}", t.level),
                (TokenKind::SoftBreak, _) => "br".to_string(),
                _ => t.content.clone(),
            })
            .collect()
    }

    #[test]
    fn same_level_lines_stay_in_one_quote() {
        let out = run(&["> a", "> b"]);
        assert_eq!(shape(&out), vec!["+q1", "a", "br", "b", "-q1"]);
    }

    #[test]
    fn deeper_level_nests_and_returns() {
        let out = run(&["> a", ">> b", "> c"]);
        assert_eq!(
            shape(&out),
            vec!["+q1", "a", "+q2", "b", "-q2", "c", "-q1"]
        );
    }

    #[test]
    fn empty_quote_line_does_not_start_with_break() {
        let out = run(&[">", "> b", "> c"]);
        assert_eq!(shape(&out), vec!["+q1", "b", "br", "c", "-q1"]);
    }

    #[test]
    fn jump_to_depth_opens_each_level() {
        let out = run(&[">>> deep"]);
        assert_eq!(shape(&out), vec!["+q1", "+q2", "+q3", "deep", "-q3", "-q2", "-q1"]);
    }
}
