//! Scan state for one inline tokenization.

use crate::parsing::{span::Span, token::Token};

use super::{cursor::Cursor, types::Marker};

/// Mutable state of a single left-to-right inline scan.
///
/// Plain characters collect in `pending` until a marker or the end of input
/// flushes them as one text token. Open markers remember the index of their
/// open token in `emitted`, so an unclosed one can be retyped in place.
pub struct InlineParserState<'a> {
    pub cursor: Cursor<'a>,
    pending: String,
    pending_start: usize,
    emitted: Vec<Token>,
    open_markers: Vec<(Marker, usize)>,
}

impl<'a> InlineParserState<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            cursor: Cursor::new(src),
            pending: String::new(),
            pending_start: 0,
            emitted: vec![],
            open_markers: vec![],
        }
    }

    /// Current nesting depth of open markers.
    pub fn depth(&self) -> usize {
        self.open_markers.len()
    }

    /// Appends `c` to the pending text. `start` is the byte offset the text
    /// run begins at if the buffer is empty.
    pub fn push_text(&mut self, c: char, start: usize) {
        if self.pending.is_empty() {
            self.pending_start = start;
        }
        self.pending.push(c);
    }

    /// Emits the pending text as a single token.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let span = Span::new(self.pending_start, self.cursor.pos());
        let text = std::mem::take(&mut self.pending);
        self.emitted
            .push(Token::text(text).with_level(self.depth()).with_span(span));
    }

    /// Consumes `marker`'s delimiter at the cursor. Closes the innermost open
    /// marker when it is the same kind, otherwise opens a new one.
    pub fn toggle(&mut self, marker: Marker) {
        self.flush();
        let delimiter = marker.delimiter();
        let start = self.cursor.pos();
        self.cursor.bump_n(delimiter.len());
        let span = Span::new(start, self.cursor.pos());

        let closes = matches!(self.open_markers.last(), Some((top, _)) if *top == marker);
        if closes {
            self.open_markers.pop();
            self.emitted.push(
                Token::close(marker.kind())
                    .with_markup(delimiter)
                    .with_level(self.depth())
                    .with_span(span),
            );
        } else {
            self.emitted.push(
                Token::open(marker.kind())
                    .with_markup(delimiter)
                    .with_level(self.depth())
                    .with_span(span),
            );
            self.open_markers.push((marker, self.emitted.len() - 1));
        }
    }

    /// Ends the scan. Markers still open are retyped into literal text,
    /// innermost first.
    pub fn finish(mut self) -> Vec<Token> {
        self.flush();
        while let Some((marker, index)) = self.open_markers.pop() {
            log::trace!("unclosed {marker:?} at token {index}, kept as text");
            let open = self.emitted[index].clone();
            self.emitted[index] = open.into_literal();
        }
        self.emitted
    }
}
