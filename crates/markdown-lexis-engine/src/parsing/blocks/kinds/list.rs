use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::closing,
    context::{ListLevel, ParsingContext},
    span::Span,
    token::{Token, TokenKind},
};

/// A parsed list marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub indent: usize,
    pub ordered: bool,
    pub marker: &'a str,
    pub content: &'a str,
}

/// Ordered (`1.`) and unordered (`-`, `*`, `+`) list items.
pub struct List;

impl List {
    fn regex() -> &'static Regex {
        static LIST_REGEX: OnceLock<Regex> = OnceLock::new();
        LIST_REGEX.get_or_init(|| {
            Regex::new(r"^([ \t]*)([-*+]|\d+\.)\s+(.*)$").expect("Invalid list regex")
        })
    }

    pub fn matches(line: &str) -> bool {
        Self::regex().is_match(line)
    }

    pub fn parse(line: &str) -> Option<ListLine<'_>> {
        let caps = Self::regex().captures(line)?;
        let indent = caps.get(1)?.as_str().chars().count();
        let marker = caps.get(2)?.as_str();
        Some(ListLine {
            indent,
            ordered: marker.ends_with('.'),
            marker,
            content: caps.get(3).map_or("", |m| m.as_str()).trim_end(),
        })
    }

    pub fn execute(line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        let Some(item) = Self::parse(line) else {
            return vec![];
        };
        let span = Span::line(ctx.current_line_index());

        let mut out = vec![];
        ctx.leave_heading();
        closing::close_paragraph(ctx, &mut out);
        closing::close_quotes(ctx, &mut out);

        // Dedent: close every level nested deeper than this marker.
        while let Some(top) = ctx.current_list_level() {
            if item.indent >= top.indent {
                break;
            }
            Self::close_level(ctx, &mut out, span);
        }

        // Same column, other marker class: a new list starts here.
        if let Some(top) = ctx.current_list_level()
            && top.indent == item.indent
            && top.ordered != item.ordered
        {
            Self::close_level(ctx, &mut out, span);
        }

        let opens = match ctx.current_list_level() {
            None => true,
            Some(top) => item.indent > top.indent,
        };
        if opens {
            let level = ListLevel {
                indent: item.indent,
                ordered: item.ordered,
            };
            let depth = ctx.list_depth();
            if ctx.enter_list_level(level) {
                out.push(
                    Token::open(TokenKind::List {
                        ordered: item.ordered,
                    })
                    .with_level(depth)
                    .with_span(span),
                );
            }
        }

        let depth = ctx.list_depth();
        out.push(
            Token::open(TokenKind::ListItem)
                .with_markup(item.marker)
                .with_level(depth)
                .with_span(span),
        );
        out.push(Token::inline(item.content).with_level(depth).with_span(span));
        out.push(
            Token::close(TokenKind::ListItem)
                .with_level(depth)
                .with_span(span),
        );
        out
    }

    fn close_level(ctx: &mut ParsingContext<'_>, out: &mut Vec<Token>, span: Span) {
        if let Some(level) = ctx.leave_list_level() {
            out.push(
                Token::close(TokenKind::List {
                    ordered: level.ordered,
                })
                .with_level(ctx.list_depth())
                .with_span(span),
            );
        }
    }
}
