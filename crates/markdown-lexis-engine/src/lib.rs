pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    MarkdownParser, ParserOptions, parse,
    span::Span,
    token::{Nesting, Token, TokenKind},
};
pub use render::{HtmlRenderer, Renderer};
