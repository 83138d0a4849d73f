use crate::parsing::{
    blocks::closing,
    context::ParsingContext,
    span::Span,
    token::{Token, TokenKind},
};

use super::CodeFence;

/// Paragraph block (marker struct).
///
/// Paragraphs have no delimiters; any non-blank line that no more specific
/// rule claimed lands here. Consecutive lines extend the open paragraph.
pub struct Paragraph;

impl Paragraph {
    pub fn matches(line: &str) -> bool {
        !line.trim().is_empty() && CodeFence::sig(line).is_none()
    }

    pub fn execute(line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        let span = Span::line(ctx.current_line_index());
        let content = Token::inline(line.trim()).with_span(span);

        if ctx.in_paragraph() {
            return vec![Token::soft_break().with_span(span), content];
        }

        let mut out = vec![];
        ctx.leave_heading();
        closing::close_lists(ctx, &mut out);
        closing::close_quotes(ctx, &mut out);

        ctx.enter_paragraph();
        out.push(Token::open(TokenKind::Paragraph).with_span(span));
        out.push(content);
        out
    }
}
