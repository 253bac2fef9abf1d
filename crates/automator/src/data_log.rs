use crate::error::{AutomatorError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A key for [`DataLog::insert`]. Any string is a key, including an empty one;
/// `None` is the absent key.
pub trait DataKey {
    fn into_key(self) -> Option<String>;
}

impl DataKey for &str {
    fn into_key(self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl DataKey for String {
    fn into_key(self) -> Option<String> {
        Some(self)
    }
}

impl DataKey for &String {
    fn into_key(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<K: DataKey> DataKey for Option<K> {
    fn into_key(self) -> Option<String> {
        self.and_then(DataKey::into_key)
    }
}

/// Arbitrary key/value data recorded during a run.
///
/// Entries are inserted or overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataLog {
    entries: BTreeMap<String, Value>,
}

impl DataLog {
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`AutomatorError::InvalidArgument`] when `key` is absent; the log is
    /// left untouched.
    pub fn insert(&mut self, key: impl DataKey, value: Value) -> Result<&Value> {
        let Some(key) = key.into_key() else {
            return Err(AutomatorError::InvalidArgument {
                message: "Key is required".into(),
                context: None,
            });
        };

        let stored = self.entries.entry(key).or_default();
        *stored = value;
        Ok(stored)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
