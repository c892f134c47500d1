//! Predicate prelude for convenient imports
//!
//! ```rust
//! use ircident::predicate::prelude::*;
//!
//! let first = any_of([letter as Rule, special]);
//! assert!(first.check(0, '{'));
//! assert!(is_valid("nick", &nickname));
//! ```

// Core trait
pub use super::combinators::{BoxedPredicate, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, And, Not, Or};

// Grammar rules
pub use super::grammar::{digit, letter, nickname, special, username, Rule, MAXIMUM_NICK_LEN};

pub use super::validation::is_valid;
