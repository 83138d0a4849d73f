use crate::parsing::token::TokenKind;

/// A paired inline delimiter that toggles a style on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Strong,
    Emphasis,
    Strike,
}

impl Marker {
    pub fn delimiter(self) -> &'static str {
        match self {
            Marker::Strong => super::kinds::Strong::DELIMITER,
            Marker::Emphasis => super::kinds::Emphasis::DELIMITER,
            Marker::Strike => super::kinds::Strike::DELIMITER,
        }
    }

    pub fn kind(self) -> TokenKind {
        match self {
            Marker::Strong => TokenKind::Strong,
            Marker::Emphasis => TokenKind::Emphasis,
            Marker::Strike => TokenKind::Strike,
        }
    }
}
