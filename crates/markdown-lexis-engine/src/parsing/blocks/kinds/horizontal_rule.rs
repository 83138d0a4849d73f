use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::closing,
    context::ParsingContext,
    span::Span,
    token::{Token, TokenKind},
};

/// Thematic break: a line of three or more `*` or `-`.
pub struct HorizontalRule;

impl HorizontalRule {
    fn regex() -> &'static Regex {
        static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
        RULE_REGEX.get_or_init(|| Regex::new(r"^(?:\*{3,}|-{3,})$").expect("Invalid rule regex"))
    }

    pub fn matches(line: &str) -> bool {
        Self::regex().is_match(line.trim())
    }

    pub fn execute(line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        let marker = line.trim().chars().next().unwrap_or('-');
        let mut out = vec![];
        closing::close_all(ctx, &mut out);
        out.push(
            Token::neutral(TokenKind::HorizontalRule)
                .with_markup(marker.to_string().repeat(3))
                .with_span(Span::line(ctx.current_line_index())),
        );
        out
    }
}
