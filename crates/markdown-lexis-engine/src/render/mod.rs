//! # Rendering
//!
//! Turns a token stream back into markup. [`Renderer`] walks the stream one
//! token at a time; [`HtmlRenderer`] is the HTML implementation.

pub mod html;

pub use html::HtmlRenderer;

use crate::parsing::token::Token;

pub trait Renderer {
    /// Renders a single token. `siblings` is the slice `token` came from and
    /// `index` its position there.
    fn render_token(&self, token: &Token, index: usize, siblings: &[Token]) -> String;

    fn render(&self, tokens: &[Token]) -> String {
        tokens
            .iter()
            .enumerate()
            .map(|(i, t)| self.render_token(t, i, tokens))
            .collect()
    }

    /// Fallback for container-less tokens: render the children if there are
    /// any, otherwise the escaped content.
    fn render_default(&self, token: &Token, _index: usize, _siblings: &[Token]) -> String {
        if token.children.is_empty() {
            html_escape::encode_text(&token.content).into_owned()
        } else {
            self.render(&token.children)
        }
    }
}
