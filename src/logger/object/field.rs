use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::logger::context::Context;

/// Structured key/value pair attached to a single record, or to a logger
/// instance for all of its future records.
///
/// # Examples
/// ```
/// use structlog::Field;
///
/// let field = Field::str("user", "alice");
/// assert_eq!(field.key(), "user");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    key: String,
    value: Value,
}

impl Field {
    /// Creates a field from a key and any value convertible to JSON.
    pub fn new<K>(key: K, value: impl Into<Value>) -> Self
    where
        K: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// String-valued field.
    pub fn str<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(key, value.into())
    }

    /// Signed integer field.
    pub fn int<K: Into<String>>(key: K, value: i64) -> Self {
        Self::new(key, value)
    }

    /// Unsigned integer field.
    pub fn uint<K: Into<String>>(key: K, value: u64) -> Self {
        Self::new(key, value)
    }

    /// Floating point field. Non-finite values encode as JSON null.
    pub fn float<K: Into<String>>(key: K, value: f64) -> Self {
        Self::new(key, value)
    }

    /// Boolean field.
    pub fn bool<K: Into<String>>(key: K, value: bool) -> Self {
        Self::new(key, value)
    }

    /// Field holding the `Display` rendering of the value.
    pub fn display<K: Into<String>>(key: K, value: impl fmt::Display) -> Self {
        Self::new(key, value.to_string())
    }

    /// Duration field, encoded as fractional seconds.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use structlog::Field;
    ///
    /// let field = Field::duration("elapsed", Duration::from_millis(1500));
    /// assert_eq!(field.value().as_f64(), Some(1.5));
    /// ```
    pub fn duration<K: Into<String>>(key: K, value: Duration) -> Self {
        Self::new(key, value.as_secs_f64())
    }

    /// Field holding any serializable value; falls back to JSON null when the
    /// value cannot be serialized.
    pub fn any<K: Into<String>, T: Serialize>(key: K, value: &T) -> Self {
        Self {
            key: key.into(),
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the encoded value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Per-derivation field extractor invoked by `with_context`: maps a
/// request-scoped [`Context`] to the fields injected into the derived logger.
pub type ApplyFields = Arc<dyn Fn(&Context) -> Vec<Field> + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_constructors_encode_expected_values() {
        assert_eq!(Field::str("k", "v").value(), &json!("v"));
        assert_eq!(Field::int("k", -3).value(), &json!(-3));
        assert_eq!(Field::uint("k", 7).value(), &json!(7));
        assert_eq!(Field::float("k", 0.5).value(), &json!(0.5));
        assert_eq!(Field::bool("k", true).value(), &json!(true));
    }

    #[test]
    fn duration_encodes_as_seconds() {
        let field = Field::duration("elapsed", Duration::from_millis(250));
        assert_eq!(field.value().as_f64(), Some(0.25));
    }

    #[test]
    fn display_uses_display_rendering() {
        let field = Field::display("addr", "127.0.0.1:8080");
        assert_eq!(field.value(), &json!("127.0.0.1:8080"));
    }

    #[test]
    fn any_serializes_structured_values() {
        #[derive(Serialize)]
        struct Peer {
            host: String,
            port: u16,
        }

        let field = Field::any(
            "peer",
            &Peer {
                host: "localhost".to_string(),
                port: 9000,
            },
        );
        assert_eq!(field.value(), &json!({"host": "localhost", "port": 9000}));
    }

    #[test]
    fn non_finite_floats_encode_as_null() {
        assert_eq!(Field::float("k", f64::NAN).value(), &Value::Null);
    }

    #[test]
    fn accessors_return_key_and_value() {
        let field = Field::int("attempts", 2);
        assert_eq!(field.key(), "attempts");
        assert_eq!(field.value(), &json!(2));
    }
}
