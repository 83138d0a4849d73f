//! Closing helpers shared by block rules and by end-of-input handling.
//!
//! Every helper emits one close token per construct it leaves, so whatever
//! was opened is balanced before a sibling block starts.

use crate::parsing::{
    context::ParsingContext,
    span::Span,
    token::{Token, TokenKind},
};

pub fn close_paragraph(ctx: &mut ParsingContext<'_>, out: &mut Vec<Token>) {
    if ctx.leave_paragraph() {
        let span = Span::line(ctx.current_line_index());
        out.push(Token::close(TokenKind::Paragraph).with_span(span));
    }
}

/// Closes every open list level, innermost first.
pub fn close_lists(ctx: &mut ParsingContext<'_>, out: &mut Vec<Token>) {
    let span = Span::line(ctx.current_line_index());
    while let Some(level) = ctx.leave_list_level() {
        out.push(
            Token::close(TokenKind::List {
                ordered: level.ordered,
            })
            .with_level(ctx.list_depth())
            .with_span(span),
        );
    }
}

/// Closes every open quote level, innermost first.
pub fn close_quotes(ctx: &mut ParsingContext<'_>, out: &mut Vec<Token>) {
    let span = Span::line(ctx.current_line_index());
    while let Some(depth) = ctx.leave_quote_level() {
        out.push(
            Token::close(TokenKind::Blockquote)
                .with_level(depth)
                .with_span(span),
        );
    }
}

/// Closes paragraph, lists and quotes, and forgets a preceding heading.
pub fn close_all(ctx: &mut ParsingContext<'_>, out: &mut Vec<Token>) {
    ctx.leave_heading();
    close_paragraph(ctx, out);
    close_lists(ctx, out);
    close_quotes(ctx, out);
}
