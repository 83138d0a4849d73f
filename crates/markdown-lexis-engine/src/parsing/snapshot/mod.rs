//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via compact summaries and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Reduces a token stream to one short line per token
//!   (`+p`, `text(Hello)`, `-p`) for readable assertions
//! - **`invariants`**: Runtime checks for parser correctness (opens and
//!   closes pair up by kind, no unexpanded inline placeholders)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
