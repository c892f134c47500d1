//! # ircident
//!
//! Nickname and username grammar for IRC servers.
//!
//! The crate decides whether a candidate identifier is acceptable under the
//! protocol's character rules. Rules are *predicates* over
//! `(position, character)` pairs that compose with short-circuiting `and` /
//! `or` combinators, and a validator runs a predicate over a whole string.
//!
//! ## Quick Example
//!
//! ```rust
//! use ircident::predicate::{is_valid, nickname, username};
//!
//! assert!(is_valid("nick1", &nickname));
//! assert!(!is_valid("1nick", &nickname)); // digit first
//! assert!(!is_valid("-nick", &nickname)); // hyphen first
//!
//! assert!(is_valid("valid_user", &username));
//! assert!(!is_valid("user@name", &username));
//! ```
//!
//! ## Validated identifiers
//!
//! ```rust
//! use ircident::{Nick, User};
//!
//! let nick = Nick::new("WiZ").unwrap();
//! let user = User::new("wiz").unwrap();
//! assert_eq!(format!("{}!{}", nick, user), "WiZ!wiz");
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events for rejections and
//!   configuration changes.
//! - `proptest`: strategies in [`testing`] that generate valid identifiers.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod identifier;
pub mod predicate;
pub mod testing;

// Re-exports
pub use config::{ConfigError, Store};
pub use identifier::{InvalidIdentifier, Nick, User};
pub use predicate::{is_valid, Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, Store};
    pub use crate::identifier::{InvalidIdentifier, Nick, User};
    pub use crate::predicate::prelude::*;
}
