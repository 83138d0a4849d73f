use crate::parsing::{blocks::closing, context::ParsingContext, token::Token};

/// Blank or whitespace-only line. Ends every open block.
pub struct EmptyLine;

impl EmptyLine {
    pub fn matches(line: &str) -> bool {
        line.trim().is_empty()
    }

    pub fn execute(ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        let mut out = vec![];
        closing::close_all(ctx, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::token::{Nesting, TokenKind};

    #[test]
    fn matches_whitespace_only() {
        assert!(EmptyLine::matches(""));
        assert!(EmptyLine::matches("   \t"));
        assert!(!EmptyLine::matches(" x "));
    }

    #[test]
    fn closes_open_paragraph() {
        let lines = ["text", ""];
        let mut ctx = ParsingContext::new(&lines);
        ctx.enter_paragraph();
        ctx.advance();

        let out = EmptyLine::execute(&mut ctx);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, TokenKind::Paragraph);
        assert_eq!(out[0].nesting, Nesting::Close);
        assert!(!ctx.in_paragraph());
    }

    #[test]
    fn nothing_open_emits_nothing() {
        let lines = [""];
        let mut ctx = ParsingContext::new(&lines);
        assert!(EmptyLine::execute(&mut ctx).is_empty());
    }
}
