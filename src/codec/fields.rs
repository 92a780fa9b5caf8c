use crate::codec::Decode;
use crate::error::DecodeError;
use crate::model::Extensions;
use crate::types::json_path::JsonPath;
use serde_json::{Map, Value};
use std::str::FromStr;

pub(crate) fn require_object<'v>(
    value: &'v Value,
    path: &JsonPath,
) -> Result<&'v Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::type_mismatch("object", value, path))
}

pub(crate) fn require_array<'v>(
    value: &'v Value,
    path: &JsonPath,
) -> Result<&'v Vec<Value>, DecodeError> {
    value
        .as_array()
        .ok_or_else(|| DecodeError::type_mismatch("array", value, path))
}

pub(crate) fn require_str<'v>(value: &'v Value, path: &JsonPath) -> Result<&'v str, DecodeError> {
    value
        .as_str()
        .ok_or_else(|| DecodeError::type_mismatch("string", value, path))
}

pub(crate) fn require_bool(value: &Value, path: &JsonPath) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| DecodeError::type_mismatch("bool", value, path))
}

/// Typed access to the members of one JSON object.
///
/// A member holding `null` is treated as absent by the optional readers and
/// as a type mismatch by the required ones; [`Fields::value`] keeps it.
pub(crate) struct Fields<'v> {
    object: &'v Map<String, Value>,
    path: &'v JsonPath,
}

impl<'v> Fields<'v> {
    pub(crate) fn new(value: &'v Value, path: &'v JsonPath) -> Result<Self, DecodeError> {
        Ok(Self {
            object: require_object(value, path)?,
            path,
        })
    }

    pub(crate) fn path(&self) -> &JsonPath {
        self.path
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'v Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    pub(crate) fn required<T: Decode>(&self, key: &'static str) -> Result<T, DecodeError> {
        let value = self
            .object
            .get(key)
            .ok_or_else(|| DecodeError::missing_field(key, self.path))?;
        T::decode(value, &self.path.key(key))
    }

    pub(crate) fn optional<T: Decode>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        self.get(key)
            .map(|value| T::decode(value, &self.path.key(key)))
            .transpose()
    }

    pub(crate) fn or_default<T: Decode + Default>(&self, key: &str) -> Result<T, DecodeError> {
        Ok(self.optional(key)?.unwrap_or_default())
    }

    /// Untyped member, kept as-is including an explicit `null`.
    pub(crate) fn value(&self, key: &str) -> Option<Value> {
        self.object.get(key).cloned()
    }

    /// A string member from a closed vocabulary.
    pub(crate) fn enumeration<T: FromStr>(
        &self,
        key: &str,
        expected: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let path = self.path.key(key);
        let text = require_str(value, &path)?;
        T::from_str(text)
            .map(Some)
            .map_err(|_| DecodeError::unknown_value(expected, text, &path))
    }

    pub(crate) fn required_enumeration<T: FromStr>(
        &self,
        key: &'static str,
        expected: &'static str,
    ) -> Result<T, DecodeError> {
        if let Some(value @ Value::Null) = self.object.get(key) {
            return Err(DecodeError::type_mismatch("string", value, &self.path.key(key)));
        }
        self.enumeration(key, expected)?
            .ok_or_else(|| DecodeError::missing_field(key, self.path))
    }

    pub(crate) fn extensions(&self) -> Extensions {
        Extensions::from_object(self.object)
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::fields::Fields;
    use crate::error::DecodeErrorKind;
    use crate::model::ParameterLocation;
    use crate::types::json_path::JsonPath;
    use crate::types::primitive::JsonKind;
    use serde_json::json;

    #[test]
    fn test_null_member_is_absent() {
        let value = json!({"description": null});
        let path = JsonPath::new();
        let fields = Fields::new(&value, &path).unwrap();

        assert_eq!(fields.optional::<String>("description").unwrap(), None);
        assert_eq!(fields.value("description"), Some(json!(null)));
    }

    #[test]
    fn test_required_member_missing() {
        let value = json!({});
        let path = JsonPath::new().key("info");
        let fields = Fields::new(&value, &path).unwrap();

        let err = fields.required::<String>("title").unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::MissingField("title"));
        assert_eq!(err.path().to_string(), ".info.title");
    }

    #[test]
    fn test_required_member_null_is_type_mismatch() {
        let value = json!({"title": null, "in": null});
        let path = JsonPath::new().key("info");
        let fields = Fields::new(&value, &path).unwrap();

        let err = fields.required::<String>("title").unwrap_err();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::TypeMismatch {
                expected: "string",
                found: JsonKind::Null
            }
        );
        assert_eq!(err.path().to_string(), ".info.title");

        let err = fields
            .required_enumeration::<ParameterLocation>("in", "query, header, path or cookie")
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorKind::TypeMismatch { found: JsonKind::Null, .. }
        ));
        assert_eq!(err.path().to_string(), ".info.in");
    }

    #[test]
    fn test_enumeration_rejects_unknown_value() {
        let value = json!({"in": "body"});
        let path = JsonPath::new();
        let fields = Fields::new(&value, &path).unwrap();

        let err = fields
            .enumeration::<ParameterLocation>("in", "query, header, path or cookie")
            .unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::UnknownValue { found, .. } if found == "body"));
        assert_eq!(err.path().to_string(), ".in");
    }

    #[test]
    fn test_non_object_is_type_mismatch() {
        let value = json!([1, 2]);
        let path = JsonPath::new().key("info");
        let err = Fields::new(&value, &path).err().unwrap();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::TypeMismatch {
                expected: "object",
                found: JsonKind::Array
            }
        );
    }
}
