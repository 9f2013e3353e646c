use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::design::element_model::Properties;

/// Lenient typed access to a property bag. Every accessor takes the value to
/// substitute when the key is absent or holds something unusable.
pub struct PropertyReader<'a> {
    props: &'a Properties,
}

impl<'a> PropertyReader<'a> {
    pub fn new(props: &'a Properties) -> Self {
        Self { props }
    }

    pub fn string(&self, key: &str, default: String) -> String {
        match self.props.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default,
        }
    }

    pub fn number(&self, key: &str, default: f64) -> f64 {
        let value = match self.props.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|v| v.is_finite()).unwrap_or(default)
    }

    pub fn count(&self, key: &str, default: u32) -> u32 {
        let value = self.number(key, default as f64);
        if value < 0.0 {
            0
        } else {
            value.min(u32::MAX as f64) as u32
        }
    }

    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.props.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) if s == "true" => true,
            Some(Value::String(s)) if s == "false" => false,
            _ => default,
        }
    }

    /// A list stored either as serialized JSON text (what editors write) or as
    /// an inline array. Anything that does not parse into `Vec<T>` yields
    /// `fallback()`.
    pub fn list<T: DeserializeOwned>(&self, key: &str, fallback: impl FnOnce() -> Vec<T>) -> Vec<T> {
        let parsed = match self.props.get(key) {
            Some(Value::String(text)) => serde_json::from_str::<Vec<T>>(text).ok(),
            Some(value @ Value::Array(_)) => serde_json::from_value::<Vec<T>>(value.clone()).ok(),
            _ => None,
        };
        parsed.unwrap_or_else(fallback)
    }
}

/// Serialize a structured property as JSON text, the shape external editors
/// store it in.
pub fn as_json_text<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: serde::Serializer,
{
    let text = serde_json::to_string(value).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&text)
}

/// Flatten a typed record into a property bag.
pub fn record_to_properties<T: Serialize>(record: &T) -> Properties {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Properties::new(),
    }
}
