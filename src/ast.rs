// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::utils::format_duration;

/// Ordered, key-unique section of a report. Iteration follows line order.
pub type Mapping = IndexMap<String, Value>;

/// A typed report value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    #[serde(serialize_with = "serialize_duration")]
    Duration(Duration),
    Integer(i64),
    Text(String),
    Mapping(Mapping),
}

fn serialize_duration<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("duration_secs", &d.as_secs_f64())?;
    map.end()
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        if let Value::Duration(d) = self {
            Some(*d)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        if let Value::Mapping(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Short variant name, used in type error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Duration(_) => "duration",
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Mapping(_) => "mapping",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(true) => write!(f, "Yes"),
            Value::Boolean(false) => write!(f, "No"),
            Value::Duration(d) => write!(f, "{}", format_duration(*d)),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Mapping(items) => write!(f, "<{} entries>", items.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Mapping> for Value {
    fn from(items: Mapping) -> Self {
        Value::Mapping(items)
    }
}
