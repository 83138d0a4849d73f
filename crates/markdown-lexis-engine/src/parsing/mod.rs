//! # Parsing
//!
//! Markdown text in, flat token stream out.
//!
//! The document is split into lines and each line is handed to the
//! [`BlockEngine`], which picks a block rule and lets it update the
//! per-call [`ParsingContext`]. Block rules emit the text they contain as
//! [`TokenKind::Inline`] placeholders; the parser expands each one with the
//! [`InlineTokenizer`] and splices the resulting tokens into the stream in
//! its place. Anything still open at the end of the document is closed.
//!
//! ## Modules
//!
//! - **`token`**: `Token`, `TokenKind`, `Nesting`
//! - **`span`**: `Span`, line ranges for block tokens and byte ranges for
//!   inline tokens
//! - **`context`**: `ParsingContext`, the frame stack and line cursor
//! - **`blocks`**: block rules and the `BlockEngine`
//! - **`inline`**: inline rules and the `InlineTokenizer`
//! - **`snapshot`**: test support (well-formedness checks, compact summaries)

pub mod blocks;
pub mod context;
pub mod inline;
pub mod snapshot;
pub mod span;
pub mod token;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use blocks::{BlockEngine, closing};
use context::ParsingContext;
use inline::InlineTokenizer;
use token::{Token, TokenKind};

/// Parser settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Trace each line's chosen rule through `log` at debug level.
    pub debug: bool,
}

/// A reusable parser. Holds only immutable rule registries, so one instance
/// can be shared across threads; every call to [`parse`](Self::parse) builds
/// its own state.
#[derive(Debug, Clone)]
pub struct MarkdownParser {
    options: ParserOptions,
    blocks: BlockEngine,
    inline: InlineTokenizer,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl MarkdownParser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            blocks: BlockEngine::with_default_rules(),
            inline: InlineTokenizer::with_default_rules(),
        }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parses `text` into a well-formed token stream. Never fails: input no
    /// rule understands ends up as paragraph text.
    pub fn parse(&self, text: &str) -> Vec<Token> {
        let lines = split_lines(text);
        let mut ctx = ParsingContext::new(&lines);
        let mut out = Vec::new();

        while !ctx.is_finished() {
            let index = ctx.current_line_index();
            let line = lines[index];
            match self.blocks.dispatch(line, &mut ctx) {
                Some((rule, tokens)) => {
                    if self.options.debug {
                        log::debug!(
                            "line {index}: {rule} in {:?} frame, {} tokens",
                            ctx.frame_name(),
                            tokens.len()
                        );
                    }
                    self.expand(tokens, &mut out);
                }
                None => {
                    if self.options.debug {
                        log::debug!("line {index}: no rule matched, dropped");
                    }
                }
            }
            ctx.advance();
        }

        let mut tail = vec![];
        closing::close_all(&mut ctx, &mut tail);
        self.expand(tail, &mut out);
        out
    }

    /// Replaces inline placeholders with their tokenized content.
    fn expand(&self, tokens: Vec<Token>, out: &mut Vec<Token>) {
        for token in tokens {
            if token.kind != TokenKind::Inline {
                out.push(token);
                continue;
            }
            let base = token.level;
            out.extend(self.inline.tokenize(&token.content).into_iter().map(|mut child| {
                child.level += base;
                child
            }));
        }
    }
}

/// Parses `text` with default options.
pub fn parse(text: &str) -> Vec<Token> {
    MarkdownParser::default().parse(text)
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
