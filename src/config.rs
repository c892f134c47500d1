//! Typed key/value configuration store
//!
//! Server settings live in a [`Store`] keyed by string. Values are kept as
//! TOML values: they go in as any `Serialize` type and come back out as any
//! compatible `Deserialize` type, so a `&str` stored under a key reads back
//! as a `String`. Non-finite floats and TOML datetimes survive the
//! round-trip.
//!
//! # Examples
//!
//! ## A local store
//!
//! ```
//! use ircident::config::{ConfigError, Store};
//!
//! let store = Store::new();
//! store.set("server.name", "irc.example.org").unwrap();
//!
//! let name: String = store.get("server.name").unwrap();
//! assert_eq!(name, "irc.example.org");
//!
//! // Wrong type
//! assert!(matches!(store.get::<u32>("server.name"), Err(ConfigError::Mismatch { .. })));
//! // Absent key
//! assert!(matches!(store.get::<String>("motd"), Err(ConfigError::Missing { .. })));
//! ```
//!
//! ## Loading TOML
//!
//! ```
//! use ircident::config::Store;
//!
//! let store = Store::from_toml_str(r#"
//!     network = "ExampleNet"
//!
//!     [limits]
//!     channels = 20
//! "#).unwrap();
//!
//! assert_eq!(store.get::<String>("network").unwrap(), "ExampleNet");
//! assert_eq!(store.get::<u16>("limits.channels").unwrap(), 20);
//! ```
//!
//! ## The process-wide store
//!
//! ```
//! use ircident::config;
//!
//! config::set("doc.example", 3).unwrap();
//! assert_eq!(config::get::<i64>("doc.example").unwrap(), 3);
//! ```

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::LazyLock;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use toml::Value;

/// Errors raised by [`Store`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// No value is stored under the key.
    Missing {
        /// The requested key.
        key: String,
    },
    /// The stored value cannot be read as the requested type.
    Mismatch {
        /// The requested key.
        key: String,
        /// Why the conversion failed.
        source: toml::de::Error,
    },
    /// The value could not be serialized for storage.
    Encode {
        /// The key being written.
        key: String,
        /// Why serialization failed.
        source: toml::ser::Error,
    },
    /// A TOML document could not be parsed.
    Parse(toml::de::Error),
}

impl ConfigError {
    /// The key involved in the failure, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::Missing { key }
            | ConfigError::Mismatch { key, .. }
            | ConfigError::Encode { key, .. } => Some(key),
            ConfigError::Parse(_) => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing { key } => write!(f, "no value for key {:?}", key),
            ConfigError::Mismatch { key, source } => {
                write!(f, "value for key {:?} has an incompatible type: {}", key, source)
            }
            ConfigError::Encode { key, source } => {
                write!(f, "cannot store value for key {:?}: {}", key, source)
            }
            ConfigError::Parse(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Missing { .. } => None,
            ConfigError::Mismatch { source, .. } => Some(source),
            ConfigError::Encode { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// A thread-safe, typed key/value store.
#[derive(Debug, Default)]
pub struct Store {
    values: RwLock<HashMap<String, Value>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a TOML document.
    ///
    /// Nested tables become dotted keys: `[limits] nicklen = 15` is stored
    /// under `limits.nicklen`. Arrays are stored whole.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = document.parse()?;
        let mut values = HashMap::new();
        flatten_table("", table, &mut values);

        #[cfg(feature = "tracing")]
        tracing::debug!(keys = values.len(), "configuration loaded");

        Ok(Self {
            values: RwLock::new(values),
        })
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: impl Into<String>, value: T) -> Result<(), ConfigError> {
        let key = key.into();
        let value = match Value::try_from(value) {
            Ok(value) => value,
            Err(source) => return Err(ConfigError::Encode { key, source }),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(key = ?key, "configuration value set");

        self.values.write().insert(key, value);
        Ok(())
    }

    /// Read the value stored under `key` as a `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        let value = self.values.read().get(key).cloned();
        let result = match value {
            Some(value) => T::deserialize(value).map_err(|source| ConfigError::Mismatch {
                key: key.to_string(),
                source,
            }),
            None => Err(ConfigError::Missing {
                key: key.to_string(),
            }),
        };

        #[cfg(feature = "tracing")]
        if let Err(ref err) = result {
            tracing::debug!(key, error = %err, "configuration lookup failed");
        }

        result
    }

    /// Whether a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    /// Remove the value under `key`, returning whether one was present.
    pub fn remove(&self, key: &str) -> bool {
        self.values.write().remove(key).is_some()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

fn flatten_table(prefix: &str, table: toml::Table, out: &mut HashMap<String, Value>) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            Value::Table(inner) => flatten_table(&key, inner, out),
            other => {
                out.insert(key, other);
            }
        }
    }
}

static GLOBAL: LazyLock<Store> = LazyLock::new(Store::new);

/// The process-wide store used by [`set`] and [`get`].
pub fn global() -> &'static Store {
    &GLOBAL
}

/// Store `value` under `key` in the process-wide store.
pub fn set<T: Serialize>(key: impl Into<String>, value: T) -> Result<(), ConfigError> {
    GLOBAL.set(key, value)
}

/// Read `key` from the process-wide store.
pub fn get<T: DeserializeOwned>(key: &str) -> Result<T, ConfigError> {
    GLOBAL.get(key)
}
