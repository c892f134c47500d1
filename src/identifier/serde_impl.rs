//! Serde support for identifiers
//!
//! Identifiers serialize as plain strings. Deserializing re-runs the
//! grammar, so invalid data never produces an [`Identifier`].
//!
//! ```rust
//! use ircident::identifier::Nick;
//!
//! let nick: Nick = serde_json::from_str(r#""Guest""#).unwrap();
//! assert_eq!(nick.as_str(), "Guest");
//!
//! assert!(serde_json::from_str::<Nick>(r#""9lives""#).is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Grammar, Identifier};

impl<G: Grammar> Serialize for Identifier<G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, G: Grammar> Deserialize<'de> for Identifier<G> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Identifier::new(value).map_err(serde::de::Error::custom)
    }
}
