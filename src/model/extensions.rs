use crate::EXTENSION_PREFIX;
use indexmap::IndexMap;
use log::warn;
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Specification extensions (`x-*` keys) attached to a node.
///
/// Flattened into the owning object on encode. Keys without the `x-` prefix
/// are never stored, so they cannot leak into the output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an extension; keys that are not `x-` prefixed are dropped.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if !key.starts_with(EXTENSION_PREFIX) {
            warn!("Ignoring extension '{}' without the '{}' prefix", key, EXTENSION_PREFIX);
            return None;
        }
        self.0.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Collects the `x-` keys of a decoded JSON object.
    pub(crate) fn from_object(object: &Map<String, Value>) -> Self {
        Extensions(
            object
                .iter()
                .filter(|(key, _)| key.starts_with(EXTENSION_PREFIX))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

impl Serialize for Extensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.0
                .iter()
                .filter(|(key, _)| key.starts_with(EXTENSION_PREFIX)),
        )
    }
}
