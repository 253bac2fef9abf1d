use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named collection of configuration toggles.
///
/// Clones share the same underlying map, so handing a `Flags` to a config keeps
/// the caller's instance rather than copying it. Use [`Flags::ptr_eq`] to check.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags {
    inner: Arc<BTreeMap<String, Value>>,
}

impl Flags {
    /// An empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a flag set from name/value pairs. Later duplicates win.
    pub fn from_map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { inner: Arc::new(map) }
    }

    /// Returns `true` when both handles point at the same flag set instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner.get(name)
    }

    /// Returns the flag value, or `default` when the flag is not set.
    pub fn get_or(&self, name: &str, default: impl Into<Value>) -> Value {
        self.inner.get(name).cloned().unwrap_or_else(|| default.into())
    }

    /// A flag is enabled only when it is set to boolean `true`.
    pub fn is_enabled(&self, name: &str) -> bool {
        matches!(self.inner.get(name), Some(Value::Bool(true)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<BTreeMap<String, Value>> for Flags {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self { inner: Arc::new(map) }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Flags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter)
    }
}
