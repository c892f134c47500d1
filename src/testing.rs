//! Testing utilities for identifier grammars
//!
//! Assertion macros for predicates and, with the `proptest` feature,
//! strategies that generate identifiers a grammar accepts.
//!
//! # Examples
//!
//! ```rust
//! use ircident::predicate::{nickname, username};
//! use ircident::{assert_accepts, assert_rejects};
//!
//! assert_accepts!(nickname, "Guest42");
//! assert_rejects!(nickname, "42Guest");
//! assert_rejects!(username, "user@host");
//! ```

/// Assert that a predicate accepts every character of a candidate.
///
/// Panics with the candidate in the message otherwise.
///
/// ```rust
/// use ircident::{assert_accepts, predicate::letter};
///
/// assert_accepts!(letter, "abc");
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($predicate:expr, $candidate:expr) => {
        match $candidate {
            candidate => {
                if !$crate::predicate::is_valid(candidate, &$predicate) {
                    panic!("Expected {:?} to be accepted, but it was rejected", candidate);
                }
            }
        }
    };
}

/// Assert that a predicate rejects a candidate.
///
/// ```rust
/// use ircident::{assert_rejects, predicate::letter};
///
/// assert_rejects!(letter, "ab1");
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $candidate:expr) => {
        match $candidate {
            candidate => {
                if $crate::predicate::is_valid(candidate, &$predicate) {
                    panic!("Expected {:?} to be rejected, but it was accepted", candidate);
                }
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::predicate::{username, MAXIMUM_NICK_LEN};

    const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    const SPECIALS: &str = "]^_`{|}";
    const DIGITS: &str = "0123456789";

    fn nick_first_chars() -> Vec<char> {
        LETTERS.chars().chain(SPECIALS.chars()).collect()
    }

    fn nick_rest_chars() -> Vec<char> {
        LETTERS
            .chars()
            .chain(SPECIALS.chars())
            .chain(DIGITS.chars())
            .chain(std::iter::once('-'))
            .collect()
    }

    /// Nicknames of 1 to [`MAXIMUM_NICK_LEN`] characters.
    pub fn valid_nickname() -> impl Strategy<Value = String> {
        (
            prop::sample::select(nick_first_chars()),
            prop::collection::vec(prop::sample::select(nick_rest_chars()), 0..MAXIMUM_NICK_LEN),
        )
            .prop_map(|(first, rest)| std::iter::once(first).chain(rest).collect())
    }

    /// Non-empty usernames drawn from U+0001..=U+00FF minus barred characters.
    pub fn valid_username() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::char::range('\u{1}', '\u{ff}').prop_filter("barred username character", |c| {
                username(0, *c)
            }),
            1..32,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }
}
