//! Raw, caller-submitted field values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping from field name to value as submitted by the host.
///
/// Presence of a key is meaningful: optional fields are signalled by being
/// absent, never by a null or empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFieldSet(Map<String, Value>);

impl RawFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for assembling inputs in code.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Parse a JSON object into a raw field set.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Stringify a field for insertion into source text.
    ///
    /// Strings are returned verbatim and numbers as their decimal text. No
    /// parsing or range checking is performed.
    pub fn text(&self, name: &str) -> Option<String> {
        self.0.get(name).map(stringify)
    }

    /// Boolean value of a flag field, `None` when absent or not a boolean.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.0.get(name).and_then(Value::as_bool)
    }
}

impl From<Map<String, Value>> for RawFieldSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
