//! Inline-specific types with owned delimiters.

pub mod emphasis;
pub mod escape;
pub mod strike;
pub mod strong;
pub mod text;

pub use emphasis::Emphasis;
pub use escape::Escape;
pub use strike::Strike;
pub use strong::Strong;
pub use text::Text;
