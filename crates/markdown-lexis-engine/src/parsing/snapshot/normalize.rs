use crate::parsing::token::{Nesting, Token, TokenKind};

/// One line per token: `+tag` for opens, `-tag` for closes and
/// `kind(content)` for everything else.
pub fn normalize(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(describe).collect()
}

fn describe(t: &Token) -> String {
    match t.nesting {
        Nesting::Open => format!("+{}", t.tag),
        Nesting::Close => format!("-{}", t.tag),
        Nesting::Neutral => match t.kind {
            TokenKind::Text => format!("text({})", t.content),
            TokenKind::SoftBreak => "softbreak".to_string(),
            TokenKind::HorizontalRule => format!("hr({})", t.markup),
            TokenKind::CodeBlock => format!("code({})", t.info),
            TokenKind::Inline => format!("inline({})", t.content),
            other => format!("{other:?}"),
        },
    }
}
