use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar sent as a form value. There is no null
/// variant: an absent value is expressed by not inserting the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Number(n) => f.write_str(&render_number(*n)),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Number-to-text the way a browser form sends it: `-0` is `0`, and
/// magnitudes outside `[1e-6, 1e21)` use `1e+21` / `1e-7` exponent form.
fn render_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let exponent_form = format!("{:e}", n);
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponent_form,
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Insertion-ordered request fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Like `insert`, but `None` leaves the fields untouched.
    pub fn insert_opt<V: Into<FieldValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_opt<V: Into<FieldValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Adapts a loosely-typed JSON object. Nulls are dropped; nested arrays
    /// and objects travel as their compact JSON text.
    pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut fields = Fields::new();
        for (key, value) in object {
            let value = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::Bool(b) => FieldValue::Bool(*b),
                serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                    (Some(i), _) => FieldValue::Integer(i),
                    (None, Some(f)) if n.is_f64() => FieldValue::Number(f),
                    _ => FieldValue::Text(n.to_string()),
                },
                serde_json::Value::String(s) => FieldValue::Text(s.clone()),
                other => FieldValue::Text(other.to_string()),
            };
            fields.insert(key.clone(), value);
        }
        fields
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Parsed backend reply, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse {
    value: serde_json::Value,
}

impl ApiResponse {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.value
    }

    pub fn into_value(self) -> serde_json::Value {
        self.value
    }

    pub fn status(&self) -> Option<ResponseStatus> {
        match self.value.get("status").and_then(|s| s.as_str()) {
            Some("success") => Some(ResponseStatus::Success),
            Some("error") => Some(ResponseStatus::Error),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == Some(ResponseStatus::Success)
    }

    pub fn message(&self) -> Option<&str> {
        self.value.get("message").and_then(|m| m.as_str())
    }

    pub fn data(&self) -> Option<&Vec<serde_json::Value>> {
        self.value.get("data").and_then(|d| d.as_array())
    }

    /// Deserializes `data` into typed records; a reply without `data` yields
    /// no records.
    pub fn records<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        match self.value.get("data") {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(data) => Ok(serde_json::from_value(data.clone())?),
        }
    }
}

impl From<serde_json::Value> for ApiResponse {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}
