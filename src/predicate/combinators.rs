//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait over
//! `(position, character)` pairs and the combinators used to compose
//! grammar rules.

use super::validation::is_valid;

/// A composable predicate over one character of a candidate identifier.
///
/// A predicate receives the zero-based character position and the character
/// itself, and answers whether the character is acceptable at that position.
///
/// Any `Fn(usize, char) -> bool` closure or function item is a predicate:
///
/// ```rust
/// use ircident::predicate::*;
///
/// fn vowel(_: usize, c: char) -> bool {
///     matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
/// }
///
/// assert!(vowel.check(0, 'a'));
/// assert!(!vowel.check(3, 'z'));
///
/// let not_first = |i: usize, _: char| i > 0;
/// assert!(!not_first.check(0, 'a'));
/// ```
pub trait Predicate: Send + Sync {
    /// Check whether `ch` at position `index` satisfies this predicate.
    fn check(&self, index: usize, ch: char) -> bool;

    /// Check every character of `candidate` against this predicate.
    ///
    /// Shorthand for [`is_valid`](super::is_valid).
    ///
    /// ```rust
    /// use ircident::predicate::*;
    ///
    /// assert!(nickname.accepts("Guest42"));
    /// assert!(!nickname.accepts("42Guest"));
    /// ```
    fn accepts(&self, candidate: &str) -> bool {
        is_valid(candidate, self)
    }
}

// Blanket impl for closures and fn items
impl<F> Predicate for F
where
    F: Fn(usize, char) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, index: usize, ch: char) -> bool {
        self(index, ch)
    }
}

/// A type-erased predicate.
///
/// Lets predicates of different concrete types share one sequence, e.g. as
/// the input of [`any_of`] or [`all_of`]. Built with [`PredicateExt::boxed`].
pub type BoxedPredicate = Box<dyn Fn(usize, char) -> bool + Send + Sync>;

/// Extension trait for predicate combinators.
///
/// Binary combinators evaluate the receiver first and the argument second,
/// short-circuiting like `&&` and `||`.
///
/// ```rust
/// use ircident::predicate::*;
///
/// let word = letter.or(digit);
/// assert!(word.check(0, 'x'));
/// assert!(word.check(0, '7'));
/// assert!(!word.check(0, '-'));
///
/// let inner_hyphen = (|i: usize, c: char| i > 0 && c == '-').not();
/// assert!(!inner_hyphen.check(2, '-'));
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Combine with AND logic; `other` runs only when `self` accepts.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic; `other` runs only when `self` rejects.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type.
    ///
    /// ```rust
    /// use ircident::predicate::*;
    ///
    /// let rules: Vec<BoxedPredicate> = vec![letter.boxed(), digit.or(special).boxed()];
    /// let p = any_of(rules);
    /// assert!(p.check(0, '_'));
    /// ```
    fn boxed(self) -> BoxedPredicate
    where
        Self: 'static,
    {
        Box::new(move |index, ch| self.check(index, ch))
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, index: usize, ch: char) -> bool {
        self.0.check(index, ch) && self.1.check(index, ch)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, index: usize, ch: char) -> bool {
        self.0.check(index, ch) || self.1.check(index, ch)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, index: usize, ch: char) -> bool {
        !self.0.check(index, ch)
    }
}

/// Accepts when any predicate of an ordered sequence accepts.
///
/// Predicates run in sequence order and evaluation stops at the first
/// acceptance. An empty sequence never accepts.
#[derive(Clone, Debug)]
pub struct AnyOf<P>(Vec<P>);

impl<P> AnyOf<P> {
    /// The combined predicates, in evaluation order.
    pub fn predicates(&self) -> &[P] {
        &self.0
    }
}

impl<P: Predicate> Predicate for AnyOf<P> {
    #[inline]
    fn check(&self, index: usize, ch: char) -> bool {
        self.0.iter().any(|p| p.check(index, ch))
    }
}

/// Create the disjunction ("Or") of an ordered sequence of predicates.
///
/// The result is `false` when `predicates` is empty: the empty disjunction
/// has no member that could accept.
///
/// ```rust
/// use ircident::predicate::*;
///
/// let first = any_of([letter as Rule, special]);
/// assert!(first.check(0, '^'));
/// assert!(!first.check(0, '1'));
///
/// let nothing = any_of(Vec::<Rule>::new());
/// assert!(!nothing.check(0, 'a'));
/// ```
pub fn any_of<P, I>(predicates: I) -> AnyOf<P>
where
    P: Predicate,
    I: IntoIterator<Item = P>,
{
    AnyOf(predicates.into_iter().collect())
}

/// Accepts when every predicate of an ordered sequence accepts.
///
/// Predicates run in sequence order and evaluation stops at the first
/// rejection. An empty sequence always accepts.
#[derive(Clone, Debug)]
pub struct AllOf<P>(Vec<P>);

impl<P> AllOf<P> {
    /// The combined predicates, in evaluation order.
    pub fn predicates(&self) -> &[P] {
        &self.0
    }
}

impl<P: Predicate> Predicate for AllOf<P> {
    #[inline]
    fn check(&self, index: usize, ch: char) -> bool {
        self.0.iter().all(|p| p.check(index, ch))
    }
}

/// Create the conjunction ("And") of an ordered sequence of predicates.
///
/// The result is `true` when `predicates` is empty.
///
/// ```rust
/// use ircident::predicate::*;
///
/// let short_lower = all_of([
///     (|i: usize, _: char| i < 4).boxed(),
///     (|_: usize, c: char| c.is_ascii_lowercase()).boxed(),
/// ]);
/// assert!(short_lower.accepts("abcd"));
/// assert!(!short_lower.accepts("abcde"));
/// assert!(all_of(Vec::<Rule>::new()).check(99, '\0'));
/// ```
pub fn all_of<P, I>(predicates: I) -> AllOf<P>
where
    P: Predicate,
    I: IntoIterator<Item = P>,
{
    AllOf(predicates.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{digit, letter, special, Rule};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn always(_: usize, _: char) -> bool {
        true
    }

    fn never(_: usize, _: char) -> bool {
        false
    }

    // Predicate that counts how often it was consulted
    fn counting(result: bool, calls: &Arc<AtomicUsize>) -> BoxedPredicate {
        let calls = Arc::clone(calls);
        Box::new(move |_: usize, _: char| {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    #[test]
    fn test_and() {
        let p = letter.and(|i: usize, _: char| i < 3);
        assert!(p.check(0, 'a'));
        assert!(!p.check(3, 'a'));
        assert!(!p.check(0, '1'));
    }

    #[test]
    fn test_or() {
        let p = letter.or(digit);
        assert!(p.check(0, 'a'));
        assert!(p.check(0, '5'));
        assert!(!p.check(0, '-'));
    }

    #[test]
    fn test_not() {
        let p = digit.not();
        assert!(p.check(0, 'a'));
        assert!(!p.check(0, '0'));
    }

    #[test]
    fn test_any_of() {
        let p = any_of([letter as Rule, digit, special]);
        assert!(p.check(0, 'Q'));
        assert!(p.check(0, '9'));
        assert!(p.check(0, '|'));
        assert!(!p.check(0, '@'));
        assert_eq!(p.predicates().len(), 3);
    }

    #[test]
    fn test_all_of() {
        let p = all_of([letter as Rule, |_: usize, c: char| c.is_ascii_uppercase()]);
        assert!(p.check(0, 'Q'));
        assert!(!p.check(0, 'q'));
        assert!(!p.check(0, '9'));
    }

    #[test]
    fn test_empty_any_of_rejects() {
        let p = any_of(Vec::<Rule>::new());
        assert!(!p.check(0, 'a'));
        assert!(!p.check(100, '\u{10FFFF}'));
    }

    #[test]
    fn test_empty_all_of_accepts() {
        let p = all_of(Vec::<Rule>::new());
        assert!(p.check(0, 'a'));
        assert!(p.check(100, '\0'));
    }

    #[test]
    fn test_any_of_stops_at_first_acceptance() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let p = any_of([counting(true, &first), counting(false, &second)]);

        for (i, c) in "anything at all".chars().enumerate() {
            assert!(p.check(i, c));
        }

        assert_eq!(first.load(Ordering::SeqCst), 15);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_of_stops_at_first_rejection() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let p = all_of([counting(false, &first), counting(true, &second)]);

        assert!(!p.check(0, 'a'));
        assert!(!p.check(1, 'b'));

        assert_eq!(first.load(Ordering::SeqCst), 2);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_any_of_runs_in_given_order() {
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let record = |tag: &'static str| {
            let order = Arc::clone(&order);
            move |_: usize, _: char| {
                order.lock().push(tag);
                false
            }
        };
        let p = any_of([record("a").boxed(), record("b").boxed(), record("c").boxed()]);

        assert!(!p.check(0, 'x'));
        assert_eq!(*order.lock(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_binary_or_short_circuits() {
        let second = Arc::new(AtomicUsize::new(0));
        let p = (always as Rule).or(counting(false, &second));
        assert!(p.check(0, 'a'));
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_binary_and_short_circuits() {
        let second = Arc::new(AtomicUsize::new(0));
        let p = (never as Rule).and(counting(true, &second));
        assert!(!p.check(0, 'a'));
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_complex_chain() {
        // (letter and not at 0) or digit, inverted
        let p = letter.and(|i: usize, _: char| i > 0).or(digit).not();
        assert!(p.check(0, 'a'));
        assert!(!p.check(1, 'a'));
        assert!(!p.check(0, '3'));
        assert!(p.check(1, '-'));
    }

    #[test]
    fn test_closure_as_predicate() {
        let even_position = |i: usize, _: char| i.is_multiple_of(2);
        assert!(even_position.check(4, 'x'));
        assert!(!even_position.check(3, 'x'));

        let combined = even_position.and(letter);
        assert!(combined.check(2, 'k'));
        assert!(!combined.check(2, '2'));
    }

    #[test]
    fn test_predicates_are_shareable_across_threads() {
        let p = Arc::new(any_of([letter as Rule, digit]));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = Arc::clone(&p);
                std::thread::spawn(move || p.accepts("abc123"))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
