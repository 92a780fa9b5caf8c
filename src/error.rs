use crate::types::json_path::JsonPath;
use crate::types::primitive::JsonKind;
use crate::types::version::VersionError;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Why a JSON value could not be decoded into a model node.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeErrorKind {
    /// The input is not valid JSON.
    MalformedJson(String),

    /// A field received a JSON value of the wrong kind.
    TypeMismatch {
        expected: &'static str,
        found: JsonKind,
    },

    /// A union input matched none of its arms.
    UnionUndecidable {
        union: &'static str,
        found: JsonKind,
    },

    /// An object carried a `$ref` whose value is not a string.
    RefShape { found: JsonKind },

    /// A required field is absent.
    MissingField(&'static str),

    /// A string outside a closed vocabulary, such as an unknown parameter location.
    UnknownValue {
        expected: &'static str,
        found: String,
    },
}

impl Display for DecodeErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeErrorKind::MalformedJson(msg) => write!(f, "Malformed JSON: {}", msg),
            DecodeErrorKind::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
            DecodeErrorKind::UnionUndecidable { union, found } => {
                write!(f, "Undecidable {}: no variant accepts {}", union, found)
            }
            DecodeErrorKind::RefShape { found } => {
                write!(f, "Invalid reference: $ref must be a string, found {}", found)
            }
            DecodeErrorKind::MissingField(field) => write!(f, "Missing field: {}", field),
            DecodeErrorKind::UnknownValue { expected, found } => {
                write!(f, "Unknown value '{}', expected {}", found, expected)
            }
        }
    }
}

/// A decode failure and the location of the node that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    path: JsonPath,
}

impl DecodeError {
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &JsonPath {
        &self.path
    }

    pub(crate) fn malformed_json(error: serde_json::Error) -> Self {
        Self {
            kind: DecodeErrorKind::MalformedJson(error.to_string()),
            path: JsonPath::new(),
        }
    }

    pub(crate) fn type_mismatch(expected: &'static str, found: &Value, path: &JsonPath) -> Self {
        Self {
            kind: DecodeErrorKind::TypeMismatch {
                expected,
                found: JsonKind::of(found),
            },
            path: path.clone(),
        }
    }

    pub(crate) fn union_undecidable(union: &'static str, found: &Value, path: &JsonPath) -> Self {
        Self {
            kind: DecodeErrorKind::UnionUndecidable {
                union,
                found: JsonKind::of(found),
            },
            path: path.clone(),
        }
    }

    pub(crate) fn ref_shape(found: &Value, path: &JsonPath) -> Self {
        Self {
            kind: DecodeErrorKind::RefShape {
                found: JsonKind::of(found),
            },
            path: path.clone(),
        }
    }

    pub(crate) fn missing_field(field: &'static str, path: &JsonPath) -> Self {
        Self {
            kind: DecodeErrorKind::MissingField(field),
            path: path.key(field),
        }
    }

    pub(crate) fn unknown_value<T>(expected: &'static str, found: &T, path: &JsonPath) -> Self
    where
        T: ToString + ?Sized,
    {
        Self {
            kind: DecodeErrorKind::UnknownValue {
                expected,
                found: found.to_string(),
            },
            path: path.clone(),
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.path)
    }
}

impl std::error::Error for DecodeError {}

#[derive(Debug)]
pub enum EncodeError {
    Serialization(String),
}

impl EncodeError {
    pub(crate) fn serialization(error: serde_json::Error) -> Self {
        EncodeError::Serialization(error.to_string())
    }
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Presence checks on an assembled document.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// An operation has no entries in `responses`.
    EmptyResponses(JsonPath),

    /// A required text field is the empty string.
    EmptyField(JsonPath),

    /// A `paths` key does not start with `/`.
    InvalidPathKey(String),

    UnsupportedVersion(String),
}

impl From<VersionError> for ValidationError {
    fn from(error: VersionError) -> Self {
        match error {
            VersionError::UnsupportedVersion(version) => {
                ValidationError::UnsupportedVersion(version)
            }
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyResponses(path) => {
                write!(f, "Operation responses must not be empty at {}", path)
            }
            ValidationError::EmptyField(path) => write!(f, "Field must not be empty at {}", path),
            ValidationError::InvalidPathKey(key) => {
                write!(f, "Path '{}' must start with '/'", key)
            }
            ValidationError::UnsupportedVersion(version) => {
                write!(f, "Unsupported OpenAPI version: {}", version)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use crate::error::{DecodeError, DecodeErrorKind, ValidationError};
    use crate::types::json_path::JsonPath;
    use crate::types::primitive::JsonKind;
    use serde_json::json;

    #[test]
    fn test_type_mismatch_display_includes_path() {
        let path = JsonPath::new().key("info").key("title");
        let err = DecodeError::type_mismatch("string", &json!(5), &path);
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::TypeMismatch {
                expected: "string",
                found: JsonKind::Integer
            }
        );
        assert_eq!(
            err.to_string(),
            "Type mismatch: expected string, found integer at .info.title"
        );
    }

    #[test]
    fn test_missing_field_points_at_field() {
        let path = JsonPath::new().key("info");
        let err = DecodeError::missing_field("version", &path);
        assert_eq!(err.path().to_string(), ".info.version");
    }

    #[test]
    fn test_malformed_json_is_reported_at_root() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DecodeError::malformed_json(parse_error);
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedJson(_)));
        assert!(err.path().is_root());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPathKey("users".to_string());
        assert_eq!(err.to_string(), "Path 'users' must start with '/'");
    }
}
