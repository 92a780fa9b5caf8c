//! Build OpenAPI 3.1 documents in code and read them back from JSON.
//!
//! The crate has three layers:
//!
//! - [`model`]: every OpenAPI 3.1 node as a plain Rust value, including the
//!   union shapes of the format (`$ref`-or-inline, `type` as a string or an
//!   array, `items` as one schema or a list, `additionalProperties` as a
//!   boolean or a schema).
//! - [`codec`]: JSON encoding through `serde_json` and a path-aware decoder
//!   that reports the location of the first offending node.
//! - [`builder`]: a chainable facade that fills in one owned [`Document`].
//!
//! # Example
//!
//! ```rust
//! use oasbuild::{Builder, Schema};
//!
//! let builder = Builder::new()
//!     .set_title("Pet Store")
//!     .set_version("1.0.0")
//!     .path("/pets/{id}")
//!     .get("Find a pet")
//!     .param_path("id", "integer", "Pet identifier")
//!     .response_json(200, "The pet", Schema::object())
//!     .done_op()
//!     .done_path();
//!
//! let json = builder.json().unwrap();
//! assert!(json.starts_with("{\n  \"openapi\": \"3.1.0\""));
//! ```

#![forbid(unsafe_code)]

pub mod builder;
pub mod codec;
pub mod error;
pub mod model;
pub mod types;
pub mod validator;

pub use builder::{Builder, OperationBuilder, PathBuilder};
pub use codec::{Decode, from_slice, from_str, from_value, to_string, to_string_pretty, to_value};
pub use error::{DecodeError, DecodeErrorKind, EncodeError, ValidationError};
pub use model::*;
pub use types::json_path::{JsonPath, PathSegment};
pub use types::method::OperationMethod;
pub use types::primitive::JsonKind;
pub use types::version::OpenApiVersion;

/// Version written into the `openapi` field of every document this crate creates.
pub const OPENAPI_VERSION: &str = "3.1.0";

const REF_FIELD: &str = "$ref";
const TYPE_FIELD: &str = "type";
const PATH_SEPARATOR: &str = "/";
const TILDE: &str = "~";
const ENCODED_SLASH: &str = "~1";
const ENCODED_TILDE: &str = "~0";
const EXTENSION_PREFIX: &str = "x-";
const JSON_MEDIA_TYPE: &str = "application/json";
const TEXT_MEDIA_TYPE: &str = "text/plain";
const EXAMPLE_KEY: &str = "example";
