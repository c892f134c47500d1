//! Running predicates over candidate strings

use super::combinators::Predicate;

/// Check every character of `candidate` against `predicate`.
///
/// Characters are visited in order with a zero-based character position
/// (not a byte offset). The scan stops at the first rejected character and
/// returns `false`; if no character is rejected it returns `true`, so the
/// empty string is always valid.
///
/// # Example
///
/// ```rust
/// use ircident::predicate::*;
///
/// assert!(is_valid("nick1", &nickname));
/// assert!(!is_valid("1nick", &nickname));
/// assert!(!is_valid("user name", &username));
/// assert!(is_valid("", &nickname));
/// ```
pub fn is_valid<P>(candidate: &str, predicate: &P) -> bool
where
    P: Predicate + ?Sized,
{
    for (index, ch) in candidate.chars().enumerate() {
        if !predicate.check(index, ch) {
            #[cfg(feature = "tracing")]
            tracing::trace!(index, ch = ?ch, "candidate rejected");
            return false;
        }
    }

    true
}
