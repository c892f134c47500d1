//! Validated nicknames and usernames
//!
//! This module applies the "parse, don't validate" pattern to identifiers:
//! a [`Nick`] or [`User`] can only be built from a string its grammar
//! accepts, so code holding one never needs to check it again.
//!
//! # Example
//!
//! ```rust
//! use ircident::identifier::{InvalidIdentifier, Nick, User};
//!
//! let nick = Nick::new("Guest42").unwrap();
//! assert_eq!(nick.as_str(), "Guest42");
//!
//! assert!(matches!(Nick::new("42Guest"), Err(InvalidIdentifier::Rejected { .. })));
//! assert!(matches!(User::new(""), Err(InvalidIdentifier::Empty { .. })));
//!
//! let user: User = "jdoe".parse().unwrap();
//! assert_eq!(user.len(), 4);
//! ```

mod serde_impl;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::predicate::{is_valid, nickname, username, Predicate, Rule};

/// The character grammar an [`Identifier`] must satisfy.
///
/// Grammars are stateless marker types; the rule itself is a [`Predicate`].
pub trait Grammar: Send + Sync + 'static {
    /// Human-readable name used in error messages, e.g. `"nickname"`.
    const KIND: &'static str;

    /// The rule every character must satisfy.
    fn predicate() -> impl Predicate;
}

/// Grammar of IRC nicknames, see [`nickname`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NickGrammar;

impl Grammar for NickGrammar {
    const KIND: &'static str = "nickname";

    fn predicate() -> impl Predicate {
        nickname as Rule
    }
}

/// Grammar of IRC usernames, see [`username`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserGrammar;

impl Grammar for UserGrammar {
    const KIND: &'static str = "username";

    fn predicate() -> impl Predicate {
        username as Rule
    }
}

/// Error returned when a string is not a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidIdentifier {
    /// The candidate was empty.
    Empty {
        /// What kind of identifier was requested.
        kind: &'static str,
    },
    /// The grammar rejected at least one character.
    Rejected {
        /// What kind of identifier was requested.
        kind: &'static str,
        /// The refused candidate.
        value: String,
    },
}

impl InvalidIdentifier {
    /// The kind of identifier that failed, e.g. `"nickname"`.
    pub fn kind(&self) -> &'static str {
        match self {
            InvalidIdentifier::Empty { kind } | InvalidIdentifier::Rejected { kind, .. } => kind,
        }
    }
}

impl fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidIdentifier::Empty { kind } => write!(f, "{} must not be empty", kind),
            InvalidIdentifier::Rejected { kind, value } => {
                write!(f, "erroneous {}: {:?}", kind, value)
            }
        }
    }
}

impl std::error::Error for InvalidIdentifier {}

/// A string guaranteed to satisfy grammar `G`.
///
/// Same layout as `String`; the grammar is a zero-sized marker.
pub struct Identifier<G: Grammar> {
    value: String,
    _grammar: PhantomData<G>,
}

/// A validated nickname.
pub type Nick = Identifier<NickGrammar>;

/// A validated username.
pub type User = Identifier<UserGrammar>;

impl<G: Grammar> Identifier<G> {
    /// Validate `value` against `G`.
    ///
    /// Empty strings are refused even though [`is_valid`] accepts them
    /// vacuously.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ircident::identifier::Nick;
    ///
    /// assert!(Nick::new("dan-").is_ok());
    /// assert!(Nick::new("-dan").is_err());
    /// assert!(Nick::new("abcdefghijklmnop").is_err()); // 16 characters
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let value = value.into();
        if value.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = G::KIND, "empty identifier refused");
            return Err(InvalidIdentifier::Empty { kind: G::KIND });
        }
        if !is_valid(&value, &G::predicate()) {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = G::KIND, value = ?value, "identifier refused");
            return Err(InvalidIdentifier::Rejected {
                kind: G::KIND,
                value,
            });
        }

        Ok(Self {
            value,
            _grammar: PhantomData,
        })
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the identifier, returning the inner string.
    #[inline]
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl<G: Grammar> fmt::Debug for Identifier<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(G::KIND).field(&self.value).finish()
    }
}

impl<G: Grammar> fmt::Display for Identifier<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<G: Grammar> Clone for Identifier<G> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _grammar: PhantomData,
        }
    }
}

// Comparison and hashing delegate to the inner string
impl<G: Grammar> PartialEq for Identifier<G> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<G: Grammar> Eq for Identifier<G> {}

impl<G: Grammar> PartialOrd for Identifier<G> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<G: Grammar> Ord for Identifier<G> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<G: Grammar> Hash for Identifier<G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<G: Grammar> AsRef<str> for Identifier<G> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<G: Grammar> Borrow<str> for Identifier<G> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<G: Grammar> std::ops::Deref for Identifier<G> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl<G: Grammar> FromStr for Identifier<G> {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<G: Grammar> TryFrom<String> for Identifier<G> {
    type Error = InvalidIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<G: Grammar> TryFrom<&str> for Identifier<G> {
    type Error = InvalidIdentifier;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<G: Grammar> From<Identifier<G>> for String {
    fn from(id: Identifier<G>) -> String {
        id.value
    }
}
