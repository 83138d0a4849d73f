use crate::parsing::token::{Nesting, Token, TokenKind};

/// Validates that a token stream is well-formed.
///
/// Asserts that:
/// - Every close matches the most recent unclosed open of the same kind
/// - Nothing is left open at the end
/// - No unexpanded inline placeholder remains
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(tokens: &[Token]) {
    let mut open: Vec<(usize, TokenKind)> = vec![];
    for (i, t) in tokens.iter().enumerate() {
        assert!(
            t.kind != TokenKind::Inline,
            "unexpanded inline token at {i}: {:?}",
            t.content
        );
        match t.nesting {
            Nesting::Open => open.push((i, t.kind)),
            Nesting::Neutral => {}
            Nesting::Close => {
                let top = open.pop();
                assert!(
                    matches!(top, Some((_, kind)) if kind == t.kind),
                    "close {:?} at {i} does not match open {:?}",
                    t.kind,
                    top
                );
            }
        }
    }
    assert!(open.is_empty(), "unclosed tokens at end of stream: {open:?}");
}

/// Returns whether replaying nesting per kind never goes negative and ends
/// at zero.
pub fn is_well_formed(tokens: &[Token]) -> bool {
    let mut depth: std::collections::HashMap<TokenKind, i64> = Default::default();
    for t in tokens {
        let d = depth.entry(t.kind).or_default();
        *d += i64::from(t.nesting.delta());
        if *d < 0 {
            return false;
        }
    }
    depth.values().all(|d| *d == 0)
}
