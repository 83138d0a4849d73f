use serde::Serialize;

/// A half-open range `[start, end)` recorded on tokens.
///
/// Block tokens use line indices into the document; inline tokens use byte
/// offsets into the content span they were scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a single line index.
    pub fn line(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Returns the length. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_span_covers_one_line() {
        let sp = Span::line(3);
        assert_eq!(sp, Span { start: 3, end: 4 });
        assert_eq!(sp.len(), 1);
    }

    #[test]
    fn inverted_span_is_empty() {
        let sp = Span::new(5, 2);
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }
}
