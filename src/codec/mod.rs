//! JSON encoding and path-aware decoding of model nodes.
//!
//! Encoding goes through the `Serialize` derives of the model. Decoding walks
//! a parsed [`serde_json::Value`] so that every failure carries the
//! [`JsonPath`] of the node that caused it.

mod document;
mod fields;
mod operation;
mod schema;
mod security;
mod union;

use crate::error::{DecodeError, EncodeError};
use crate::model::{
    Components, Document, Info, Operation, Parameter, PathItem, RequestBody, Response, Schema,
    SecurityScheme,
};
use crate::types::json_path::JsonPath;
use fields::{require_array, require_bool, require_object, require_str};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use serde_json::{Number, Value};

pub(crate) use fields::Fields;

/// Builds a model node from a JSON value.
pub trait Decode: Sized {
    /// `path` locates `value` inside the document being decoded.
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError>;
}

pub fn from_value<T: Decode>(value: &Value) -> Result<T, DecodeError> {
    T::decode(value, &JsonPath::new()).inspect_err(|err| {
        debug!("Failed to decode {}: {}", std::any::type_name::<T>(), err);
    })
}

pub fn from_str<T: Decode>(input: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(input).map_err(DecodeError::malformed_json)?;
    from_value(&value)
}

pub fn from_slice<T: Decode>(input: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(input).map_err(DecodeError::malformed_json)?;
    from_value(&value)
}

pub fn to_value<T: Serialize>(node: &T) -> Result<Value, EncodeError> {
    serde_json::to_value(node).map_err(EncodeError::serialization)
}

/// Compact JSON.
pub fn to_string<T: Serialize>(node: &T) -> Result<String, EncodeError> {
    serde_json::to_string(node).map_err(EncodeError::serialization)
}

/// JSON indented by two spaces, one member per line.
pub fn to_string_pretty<T: Serialize>(node: &T) -> Result<String, EncodeError> {
    serde_json::to_string_pretty(node).map_err(EncodeError::serialization)
}

impl Decode for String {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        require_str(value, path).map(str::to_owned)
    }
}

impl Decode for bool {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        require_bool(value, path)
    }
}

impl Decode for u64 {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        value
            .as_u64()
            .ok_or_else(|| DecodeError::type_mismatch("non-negative integer", value, path))
    }
}

impl Decode for Number {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        match value {
            Value::Number(number) => Ok(number.clone()),
            _ => Err(DecodeError::type_mismatch("number", value, path)),
        }
    }
}

impl Decode for Value {
    fn decode(value: &Value, _path: &JsonPath) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        T::decode(value, path).map(Box::new)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        require_array(value, path)?
            .iter()
            .enumerate()
            .map(|(index, element)| T::decode(element, &path.index(index)))
            .collect()
    }
}

impl<T: Decode> Decode for IndexMap<String, T> {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        require_object(value, path)?
            .iter()
            .map(|(key, member)| T::decode(member, &path.key(key)).map(|item| (key.clone(), item)))
            .collect()
    }
}

/// `Deserialize` for model roots, delegating to [`Decode`] so that serde
/// users get the same located errors.
macro_rules! deserialize_with_decode {
    ($($node:ty),* $(,)?) => {
        $(
            impl<'de> serde::Deserialize<'de> for $node {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
                    <$node as Decode>::decode(&value, &JsonPath::new())
                        .map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

deserialize_with_decode!(
    Document,
    Info,
    Components,
    PathItem,
    Operation,
    Parameter,
    RequestBody,
    Response,
    Schema,
    SecurityScheme,
);

#[cfg(test)]
mod tests {
    use crate::codec::{from_slice, from_str, to_string, to_string_pretty};
    use crate::error::DecodeErrorKind;
    use crate::model::{Document, Info, Schema};
    use crate::types::primitive::JsonKind;
    use indexmap::IndexMap;

    #[test]
    fn test_malformed_json() {
        let err = from_str::<Document>("{\"openapi\": ").unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedJson(_)));
    }

    #[test]
    fn test_pretty_output_uses_two_spaces() {
        let mut document = Document::new();
        document.info = Info::new("X", "1");
        assert_eq!(
            to_string_pretty(&document).unwrap(),
            "{\n  \"openapi\": \"3.1.0\",\n  \"info\": {\n    \"title\": \"X\",\n    \"version\": \"1\"\n  }\n}"
        );
    }

    #[test]
    fn test_map_keeps_insertion_order() {
        let input = r#"{"zeta":{"type":"string"},"alpha":{"type":"integer"},"mid":{"type":"boolean"}}"#;
        let schemas: IndexMap<String, Schema> = from_str(input).unwrap();
        let keys: Vec<&str> = schemas.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(to_string(&schemas).unwrap(), input);
    }

    #[test]
    fn test_vec_error_carries_index() {
        let err = from_slice::<Vec<String>>(br#"["a", 2]"#).unwrap_err();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::TypeMismatch {
                expected: "string",
                found: JsonKind::Integer
            }
        );
        assert_eq!(err.path().to_string(), "[1]");
    }

    #[test]
    fn test_serde_deserialize_uses_decoder() {
        let err = serde_json::from_str::<Schema>(r#"{"type": 123}"#).unwrap_err();
        assert!(err.to_string().contains("at .type"));

        let schema: Schema = serde_json::from_str(r#"{"type": "string"}"#).unwrap();
        assert_eq!(schema, Schema::string());
    }
}
