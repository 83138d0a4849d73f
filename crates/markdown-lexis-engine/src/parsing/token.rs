//! # Tokens
//!
//! The output unit of the parser. A document becomes a flat, ordered stream
//! of tokens; structure is carried by [`Nesting`] (open/close pairs) rather
//! than by a tree. Only the inline-container kind ([`TokenKind::Inline`])
//! uses `children`.

use serde::{Serialize, Serializer};

use super::span::Span;

/// Role of a token in an open/close pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nesting {
    /// Opens a new nesting level (`+1`).
    Open,
    /// Does not affect nesting (`0`): text, rules, code blocks.
    Neutral,
    /// Closes the current nesting level (`-1`).
    Close,
}

impl Nesting {
    pub fn delta(self) -> i8 {
        match self {
            Nesting::Open => 1,
            Nesting::Neutral => 0,
            Nesting::Close => -1,
        }
    }
}

impl Serialize for Nesting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.delta())
    }
}

/// Closed set of token kinds. Open and close events share a kind and differ
/// only in [`Nesting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Paragraph,
    Heading { level: u8 },
    List { ordered: bool },
    ListItem,
    Blockquote,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell { header: bool },
    HorizontalRule,
    CodeBlock,
    SoftBreak,
    Strong,
    Emphasis,
    Strike,
    Text,
    /// Unexpanded inline content of a block; `content` holds the raw text and
    /// `children` the tokens it expands to.
    Inline,
}

impl TokenKind {
    /// HTML tag used as a rendering hint.
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Paragraph => "p",
            TokenKind::Heading { level } => match level {
                0 | 1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            TokenKind::List { ordered: true } => "ol",
            TokenKind::List { ordered: false } => "ul",
            TokenKind::ListItem => "li",
            TokenKind::Blockquote => "blockquote",
            TokenKind::Table => "table",
            TokenKind::TableHead => "thead",
            TokenKind::TableBody => "tbody",
            TokenKind::TableRow => "tr",
            TokenKind::TableCell { header: true } => "th",
            TokenKind::TableCell { header: false } => "td",
            TokenKind::HorizontalRule => "hr",
            TokenKind::CodeBlock => "code",
            TokenKind::Strong => "strong",
            TokenKind::Emphasis => "em",
            TokenKind::Strike => "del",
            TokenKind::SoftBreak | TokenKind::Text | TokenKind::Inline => "",
        }
    }

    /// Whether tokens of this kind are structural block tokens.
    pub fn is_block(self) -> bool {
        !matches!(
            self,
            TokenKind::SoftBreak
                | TokenKind::Strong
                | TokenKind::Emphasis
                | TokenKind::Strike
                | TokenKind::Text
                | TokenKind::Inline
        )
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A single markup event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub tag: &'static str,
    pub nesting: Nesting,
    /// Ordered attribute pairs, e.g. `("style", "text-align: left")`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Source delimiter such as `**`, `---` or a code fence.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub markup: String,
    /// Info string of a code fence.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_span: Option<Span>,
    pub level: usize,
    pub is_block: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
}

impl Token {
    pub fn new(kind: TokenKind, nesting: Nesting) -> Self {
        Self {
            kind,
            tag: kind.tag(),
            nesting,
            attributes: Vec::new(),
            content: String::new(),
            markup: String::new(),
            info: String::new(),
            children: Vec::new(),
            source_span: None,
            level: 0,
            is_block: kind.is_block(),
            hidden: false,
        }
    }

    pub fn open(kind: TokenKind) -> Self {
        Self::new(kind, Nesting::Open)
    }

    pub fn close(kind: TokenKind) -> Self {
        Self::new(kind, Nesting::Close)
    }

    pub fn neutral(kind: TokenKind) -> Self {
        Self::new(kind, Nesting::Neutral)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::neutral(TokenKind::Text).with_content(content)
    }

    /// Raw inline content awaiting expansion by the inline tokenizer.
    pub fn inline(content: impl Into<String>) -> Self {
        Self::neutral(TokenKind::Inline).with_content(content)
    }

    pub fn soft_break() -> Self {
        Self::neutral(TokenKind::SoftBreak).with_markup("\n")
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = markup.into();
        self
    }

    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Token>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.source_span = Some(span);
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Looks up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.nesting == Nesting::Open
    }

    pub fn is_close(&self) -> bool {
        self.nesting == Nesting::Close
    }

    /// Converts an unmatched open marker into plain text carrying its literal
    /// markup, keeping its position information.
    #[must_use]
    pub fn into_literal(self) -> Token {
        let mut text = Token::text(self.markup).with_level(self.level);
        text.source_span = self.source_span;
        text
    }
}
