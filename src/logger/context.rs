use std::collections::BTreeMap;

use serde_json::Value;

/// Request-scoped data bag handed to the configured `apply_fields` extractor.
///
/// Carries values only; it has no cancellation or deadline semantics.
///
/// # Examples
/// ```
/// use structlog::Context;
///
/// let ctx = Context::new().with_value("request_id", "9f31");
/// assert_eq!(ctx.value("request_id").and_then(|v| v.as_str()), Some("9f31"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value and return the updated context.
    pub fn with_value<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a value by key.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_context_is_empty() {
        let ctx = Context::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.len(), 0);
    }

    #[test]
    fn with_value_stores_and_returns_values() {
        let ctx = Context::new()
            .with_value("request_id", "9f31")
            .with_value("attempt", 2);

        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.value("request_id"), Some(&json!("9f31")));
        assert_eq!(ctx.value("attempt"), Some(&json!(2)));
        assert_eq!(ctx.value("missing"), None);
    }

    #[test]
    fn later_value_replaces_earlier_for_same_key() {
        let ctx = Context::new()
            .with_value("attempt", 1)
            .with_value("attempt", 2);

        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.value("attempt"), Some(&json!(2)));
    }
}
