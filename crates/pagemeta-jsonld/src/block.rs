//! JSON-LD output blocks.

use serde::Serialize;
use serde_json::Value;

/// A composed, prioritized, identified unit of generated structured output.
///
/// Blocks are created by a [`Generator`](crate::generator::Generator)
/// invocation and are immutable afterwards; the composer consumes, orders,
/// and possibly drops them but never mutates them in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Stable short identifier, unique within a composed collection.
    pub id: String,

    /// Ordering key; lower sorts first, ties keep input order.
    pub priority: i32,

    /// Schema.org category tag. Informational only after creation.
    #[serde(rename = "type")]
    pub type_name: String,

    /// The generated payload, or `Value::Null` if generation was suppressed
    /// after the fact (e.g., by an `after_generate` hook).
    pub data: Value,
}

impl Block {
    /// Create a block directly, bypassing the generator lifecycle.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        priority: i32,
        type_name: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            id: id.into(),
            priority,
            type_name: type_name.into(),
            data,
        }
    }

    /// Whether this block carries a payload the composer will emit.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.data.is_null()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_has_data() {
        let block = Block::new("person", 1, "Person", json!({"name": "Jane"}));
        assert!(block.has_data());

        let empty = Block::new("person", 1, "Person", Value::Null);
        assert!(!empty.has_data());
    }

    #[test]
    fn test_serializes_type_field() {
        let block = Block::new("person", 1, "Person", json!({}));
        let serialized = serde_json::to_value(&block).expect("serialize");
        assert_eq!(serialized["type"], "Person");
        assert_eq!(serialized["id"], "person");
    }
}
