use crate::parsing::{
    blocks::closing,
    context::ParsingContext,
    span::Span,
    token::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn delimiter(self) -> &'static str {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICKS,
            FenceKind::Tildes => CodeFence::TILDES,
        }
    }

    fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// Fenced code block. Everything up to the matching closing fence is kept
/// verbatim; an unclosed fence runs to the end of the document.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn sig(line: &str) -> Option<FenceKind> {
        let t = line.trim_start();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    pub fn matches(line: &str) -> bool {
        Self::sig(line).is_some()
    }

    pub fn closes(kind: FenceKind, sig: Option<FenceKind>) -> bool {
        sig == Some(kind)
    }

    /// Text after the opening fence, e.g. `rust` in ```` ```rust ````.
    pub fn info(line: &str, kind: FenceKind) -> &str {
        line.trim_start().trim_start_matches(kind.char()).trim()
    }

    pub fn execute(line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        let Some(kind) = Self::sig(line) else {
            return vec![];
        };
        let start = ctx.current_line_index();

        let mut out = vec![];
        closing::close_all(ctx, &mut out);

        let lines = ctx.lines();
        let mut content = String::new();
        let mut last = lines.len().saturating_sub(1);
        for (index, inner) in lines.iter().enumerate().skip(start + 1) {
            if Self::closes(kind, Self::sig(inner)) {
                last = index;
                break;
            }
            content.push_str(inner);
            content.push('\n');
        }

        out.push(
            Token::neutral(TokenKind::CodeBlock)
                .with_content(content)
                .with_info(Self::info(line, kind))
                .with_markup(kind.delimiter())
                .with_span(Span::new(start, last + 1)),
        );
        ctx.advance_to(last);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```rust"), Some(FenceKind::Backticks));
        assert_eq!(CodeFence::sig("  ```"), Some(FenceKind::Backticks));
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~"), Some(FenceKind::Tildes));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("~~strike~~"), None);
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        assert!(!CodeFence::closes(FenceKind::Backticks, Some(FenceKind::Tildes)));
        assert!(!CodeFence::closes(FenceKind::Tildes, None));
    }

    #[test]
    fn captures_body_and_info() {
        let lines = ["```rust ", "let x = 1;", "", "```", "after"];
        let mut ctx = ParsingContext::new(&lines);
        let out = CodeFence::execute(lines[0], &mut ctx);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].content, "let x = 1;\n\n");
        assert_eq!(out[0].info, "rust");
        assert_eq!(out[0].markup, "```");
        assert_eq!(ctx.current_line_index(), 3);
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        let lines = ["~~~", "a", "```"];
        let mut ctx = ParsingContext::new(&lines);
        let out = CodeFence::execute(lines[0], &mut ctx);

        assert_eq!(out[0].content, "a\n```\n");
        assert_eq!(ctx.current_line_index(), 2);
        assert_eq!(out[0].source_span, Some(Span::new(0, 3)));
    }
}
