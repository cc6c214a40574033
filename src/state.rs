//! Shared data state threaded through rendering and action invocation.
//!
//! One [`DataState`] exists per rendered screen. Component handlers read it,
//! action handlers write it (form input, navigation). There is no versioning
//! and no transaction: the last write wins.

use std::collections::HashMap;

/// String-to-string map shared by every handler of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataState {
    values: HashMap<String, String>,
}

impl DataState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Append to the value under `key`, creating it if absent.
    pub fn append(&mut self, key: &str, suffix: &str) {
        self.values.entry(key.to_string()).or_default().push_str(suffix);
    }

    /// Remove the last character of the value under `key`, if any.
    pub fn pop_char(&mut self, key: &str) -> Option<char> {
        self.values.get_mut(key).and_then(String::pop)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.values
    }
}

impl From<HashMap<String, String>> for DataState {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for DataState
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
