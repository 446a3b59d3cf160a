//! API Response envelopes
//!
//! The backend wraps collections inconsistently: a bare array, `{data: [...]}`,
//! `{items: [...]}`, `{data: {items: [...]}}` or plain `null`, depending on
//! the endpoint. Everything is unwrapped once here so downstream code only
//! ever sees `Vec<T>`.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::normalize::aliases;

/// Any of the list shapes the backend is known to return
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Data { data: Vec<T> },
    Items { items: Vec<T> },
    Results { results: Vec<T> },
    NestedItems { data: ItemsOnly<T> },
    /// `null`, `{}`, an error body with 200 status, ...
    Unrecognized(serde_json::Value),
}

/// `{items: [...]}` nested under `data`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsOnly<T> {
    pub items: Vec<T>,
}

impl<T> ListEnvelope<T> {
    /// Unwrap to the contained list; unrecognized shapes become empty
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items)
            | Self::Data { data: items }
            | Self::Items { items }
            | Self::Results { results: items } => items,
            Self::NestedItems { data } => data.items,
            Self::Unrecognized(_) => Vec::new(),
        }
    }

    /// Whether the payload matched a known list shape
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self::Bare(Vec::new())
    }
}

/// Single-record responses: `{data: {...}}` or the bare record
///
/// An object with its own id is the record, even when one of its fields
/// happens to be called `data`.
#[derive(Debug, Clone)]
pub enum ItemEnvelope<T> {
    Data { data: T },
    Bare(T),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ItemEnvelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw = Value::deserialize(deserializer)?;
        let wrapped = raw.as_object().is_some_and(|obj| {
            obj.contains_key("data") && !aliases::ID.iter().any(|key| obj.contains_key(*key))
        });
        if wrapped {
            let data = raw.get_mut("data").map(Value::take).unwrap_or_default();
            serde_json::from_value(data)
                .map(|data| Self::Data { data })
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(raw).map(Self::Bare).map_err(D::Error::custom)
        }
    }
}

impl<T> ItemEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Data { data } | Self::Bare(data) => data,
        }
    }
}
