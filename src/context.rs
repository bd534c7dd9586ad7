use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat key/value environment that variable references resolve against.
///
/// A key that is absent is distinct from a key mapped to `""`. When read from
/// JSON, `null` values are dropped so they behave like absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, Option<String>>", into = "HashMap<String, String>")]
pub struct Context {
    vars: HashMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<HashMap<String, Option<String>>> for Context {
    fn from(raw: HashMap<String, Option<String>>) -> Self {
        let vars = raw
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();
        Self { vars }
    }
}

impl From<Context> for HashMap<String, String> {
    fn from(ctx: Context) -> Self {
        ctx.vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars }
    }
}
