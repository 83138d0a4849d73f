//! # Block Parsing
//!
//! Line-oriented block recognition. Each line goes to the first
//! [`BlockRule`] (in declared precedence) whose `matches` accepts it, and
//! that rule's `execute` emits tokens and updates the [`ParsingContext`].
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`rule`**: `BlockRule`, the closed rule set and its precedence
//! - **`engine`**: `BlockEngine`, the ordered rule registry
//! - **`closing`**: helpers that balance open paragraphs, lists and quotes
//!
//! ## Key Invariants
//!
//! - Every open token is closed before the stream ends
//! - At most one of paragraph, list or blockquote is open at a time
//! - List nesting stops at [`MAX_LIST_DEPTH`] levels
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//!
//! [`ParsingContext`]: crate::parsing::context::ParsingContext
//! [`MAX_LIST_DEPTH`]: crate::parsing::context::MAX_LIST_DEPTH

pub mod closing;
pub mod engine;
pub mod kinds;
pub mod rule;

pub use engine::BlockEngine;
pub use rule::BlockRule;
