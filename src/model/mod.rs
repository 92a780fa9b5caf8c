//! Plain data types for every node of an OpenAPI 3.1 document.
//!
//! Absent optional fields are `None` (or an empty collection) and are omitted
//! on encode; a present but empty string is `Some(String::new())` and is
//! written as `""`.

mod components;
mod document;
mod extensions;
mod parameter;
mod paths;
mod response;
mod schema;
mod security;
mod union;

pub use components::{ComponentKind, Components};
pub use document::{Contact, Document, ExternalDocumentation, Info, License, Server, ServerVariable, Tag};
pub use extensions::Extensions;
pub use parameter::{Encoding, Header, MediaType, Parameter, ParameterLocation, ParameterStyle, RequestBody};
pub use paths::{Callback, Operation, PathItem, Paths, Responses};
pub use response::{Example, Link, Response};
pub use schema::{Discriminator, Schema, Xml};
pub use security::{ApiKeyLocation, OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
pub use union::{
    AdditionalProperties, CallbackOrRef, ExampleOrRef, HeaderOrRef, Items, LinkOrRef, OrRef,
    ParameterOrRef, PathItemOrRef, Reference, RequestBodyOrRef, ResponseOrRef, SchemaOrRef,
    SecuritySchemeOrRef, StringOrArray,
};
