use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::closing,
    context::ParsingContext,
    span::Span,
    token::{Token, TokenKind},
};

/// ATX heading: one to six `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    fn regex() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| {
            Regex::new(r"^(#{1,6})\s(.*)$").expect("Invalid heading regex")
        })
    }

    pub fn matches(line: &str) -> bool {
        Self::regex().is_match(line)
    }

    /// Returns `(level, title)` for a heading line.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = Self::regex().captures(line)?;
        let hashes = caps.get(1)?.as_str().len();
        let level = hashes.clamp(1, Self::MAX_LEVEL) as u8;
        let title = caps.get(2).map_or("", |m| m.as_str()).trim();
        Some((level, title))
    }

    pub fn execute(line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        let Some((level, title)) = Self::parse(line) else {
            return vec![];
        };
        let span = Span::line(ctx.current_line_index());
        let kind = TokenKind::Heading { level };

        let mut out = vec![];
        closing::close_all(ctx, &mut out);
        ctx.enter_heading();

        out.push(
            Token::open(kind)
                .with_markup(Self::MARKER.to_string().repeat(level as usize))
                .with_span(span),
        );
        out.push(Token::inline(title).with_span(span));
        out.push(Token::close(kind).with_span(span));
        out
    }
}
