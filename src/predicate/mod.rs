//! Character predicates for identifier grammars
//!
//! A predicate judges one character of a candidate identifier, given its
//! zero-based position. Grammar rules such as [`nickname`] and [`username`]
//! are predicates, and predicates compose with [`any_of`] / [`all_of`] or
//! the [`PredicateExt`] methods. [`is_valid`] runs a predicate over a whole
//! candidate string.
//!
//! # Example
//!
//! ```rust
//! use ircident::predicate::*;
//!
//! // Built-in rules
//! assert!(is_valid("WiZ", &nickname));
//! assert!(!is_valid("9lives", &nickname));
//!
//! // Compose a stricter rule: a nickname made only of letters
//! let letters_only = all_of([nickname as Rule, letter]);
//! assert!(is_valid("alice", &letters_only));
//! assert!(!is_valid("alice_", &letters_only));
//! ```
//!
//! # Short-circuiting
//!
//! Combinators evaluate their predicates in the order given and stop as soon
//! as the outcome is known. [`any_of`] over no predicates rejects everything;
//! [`all_of`] over no predicates accepts everything.

mod combinators;
mod grammar;
mod validation;

pub mod prelude;

// Re-export core trait
pub use combinators::{BoxedPredicate, Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, AllOf, And, AnyOf, Not, Or};

// Re-export grammar rules
pub use grammar::{digit, letter, nickname, special, username, Rule, MAXIMUM_NICK_LEN};

pub use validation::is_valid;
