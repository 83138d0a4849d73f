//! # Inline Parsing
//!
//! Turns the text content of a block into inline tokens in one
//! left-to-right pass.
//!
//! ## Modules
//!
//! - **`types`**: `Marker`, the paired delimiters (strong, emphasis, strike)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`state`**: `InlineParserState`, the pending text and open markers
//! - **`rule`**: `InlineRule`, the closed rule set and its precedence
//! - **`tokenizer`**: `InlineTokenizer`, the scan loop
//!
//! ## Marker Pairing
//!
//! A delimiter closes the innermost open marker only when it is the same
//! kind; otherwise it opens a new one. Markers still open at the end of the
//! content are retyped into text carrying their literal delimiter, so
//! `**bold` yields the text tokens `**` and `bold`.

pub mod cursor;
pub mod kinds;
pub mod rule;
pub mod state;
pub mod tokenizer;
pub mod types;

pub use rule::InlineRule;
pub use state::InlineParserState;
pub use tokenizer::InlineTokenizer;
pub use types::Marker;
