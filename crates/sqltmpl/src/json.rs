//! `serde_json` conversions for argument values.
//!
//! - `null` → [`Value::Null`], booleans → [`Value::Bool`]
//! - integral numbers that fit `i64` → [`Value::Int`], other numbers → [`Value::Float`]
//! - strings → [`Value::Text`]
//! - arrays → [`Value::List`]
//! - objects → [`Value::Array`] of keyed entries, in document order

use crate::value::{Entry, Value};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 above i64::MAX and non-integral numbers.
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| Entry::Keyed(k, Value::from(v)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!(5)), Value::Int(5));
        assert_eq!(Value::from(json!(-5)), Value::Int(-5));
        assert_eq!(Value::from(json!(2.5)), Value::Float(2.5));
        assert_eq!(Value::from(json!("a")), Value::Text("a".into()));
    }

    #[test]
    fn large_unsigned_becomes_float() {
        assert!(matches!(Value::from(json!(u64::MAX)), Value::Float(_)));
    }

    #[test]
    fn arrays_become_lists() {
        assert_eq!(
            Value::from(json!(["name", 1])),
            Value::List(vec![Value::from("name"), Value::Int(1)])
        );
    }

    #[test]
    fn objects_keep_document_order() {
        let v = Value::from(json!({"zeta": 1, "alpha": "a"}));
        assert_eq!(
            v,
            Value::Array(vec![
                Entry::keyed("zeta", 1),
                Entry::keyed("alpha", "a"),
            ])
        );
    }
}
