//! Input values and the record submitted for validation.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

/// Stand-in for a field missing from the record.
pub(crate) static EMPTY: Value = Value::Text(String::new());

/// A single field value.
///
/// `Secret` keeps the value out of `Debug` output; use it for passwords.
#[derive(Debug)]
pub enum Value {
    Text(String),
    Number(f64),
    Secret(SecretString),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    pub fn secret(value: impl Into<String>) -> Self {
        Value::Secret(SecretString::new(value.into().into_boxed_str()))
    }

    /// Returns the string content for `Text` and `Secret`, `None` for numbers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Secret(s) => Some(s.expose_secret()),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True for empty or whitespace-only strings. Numbers are never blank.
    pub fn is_blank(&self) -> bool {
        self.as_str().is_some_and(|s| s.trim().is_empty())
    }
}

/// Structured input: field identifier to value.
///
/// Keys that no field definition references are ignored by the engine.
#[derive(Debug, Default)]
pub struct Record {
    values: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(field.into(), value)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
