use serde_json::Value;
use std::fmt::{Display, Formatter};

/// The kind of a JSON value, as reported in decode errors.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum JsonKind {
    Null,
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl Display for JsonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonKind::Null => write!(f, "null"),
            JsonKind::Bool => write!(f, "bool"),
            JsonKind::Integer => write!(f, "integer"),
            JsonKind::Number => write!(f, "number"),
            JsonKind::String => write!(f, "string"),
            JsonKind::Array => write!(f, "array"),
            JsonKind::Object => write!(f, "object"),
        }
    }
}

impl JsonKind {
    pub fn of(value: &Value) -> JsonKind {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(number) if number.is_i64() || number.is_u64() => JsonKind::Integer,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::primitive::JsonKind;
    use serde_json::json;

    #[test]
    fn test_kind_of_each_value() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(123)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(-4)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("a")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([1])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_display() {
        assert_eq!(JsonKind::Integer.to_string(), "integer");
        assert_eq!(JsonKind::Object.to_string(), "object");
    }
}
