//! Block kinds. Each kind is a marker struct owning its delimiters, its
//! `matches` test and its `execute` state transition.

pub mod block_quote;
pub mod code_fence;
pub mod empty_line;
pub mod heading;
pub mod horizontal_rule;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use empty_line::EmptyLine;
pub use heading::Heading;
pub use horizontal_rule::HorizontalRule;
pub use list::{List, ListLine};
pub use paragraph::Paragraph;
pub use table::{Alignment, Table};
