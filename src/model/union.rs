use crate::model::{
    Callback, ComponentKind, Example, Header, Link, Parameter, PathItem, RequestBody, Response,
    Schema, SecurityScheme,
};
use crate::types::json_path::escape_pointer_segment;
use crate::PATH_SEPARATOR;
use log::warn;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

/// Characters that may not appear verbatim in a URI fragment.
const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// A `{"$ref": "..."}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Points at a named entry of the components registry,
    /// e.g. `#/components/schemas/User`.
    pub fn component(kind: ComponentKind, name: &str) -> Self {
        Self::new(format!(
            "#/components/{}/{}",
            kind.as_str(),
            encode_fragment_segment(name)
        ))
    }

    /// Points at a path item, e.g. `#/paths/~1pets~1%7Bid%7D` for `/pets/{id}`.
    pub fn path(template: &str) -> Self {
        Self::new(format!("#/paths{}{}", PATH_SEPARATOR, encode_fragment_segment(template)))
    }

    pub fn as_str(&self) -> &str {
        &self.reference
    }
}

fn encode_fragment_segment(segment: &str) -> String {
    utf8_percent_encode(&escape_pointer_segment(segment), FRAGMENT).to_string()
}

/// Either an inline `T` or a reference to one defined elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrRef<T> {
    Ref(Reference),
    Item(T),
}

impl<T> OrRef<T> {
    pub fn new_ref(reference: impl Into<String>) -> Self {
        OrRef::Ref(Reference::new(reference))
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, OrRef::Ref(_))
    }

    pub fn reference(&self) -> Option<&Reference> {
        match self {
            OrRef::Ref(reference) => Some(reference),
            OrRef::Item(_) => None,
        }
    }

    pub fn item(&self) -> Option<&T> {
        match self {
            OrRef::Ref(_) => None,
            OrRef::Item(item) => Some(item),
        }
    }

    pub fn item_mut(&mut self) -> Option<&mut T> {
        match self {
            OrRef::Ref(_) => None,
            OrRef::Item(item) => Some(item),
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            OrRef::Ref(_) => None,
            OrRef::Item(item) => Some(item),
        }
    }

    /// Returns the inline item, first replacing a reference with `f()`.
    pub fn get_or_insert_item_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_ref() {
            *self = OrRef::Item(f());
        }
        match self {
            OrRef::Item(item) => item,
            OrRef::Ref(_) => unreachable!(),
        }
    }
}

impl<T> From<Reference> for OrRef<T> {
    fn from(reference: Reference) -> Self {
        OrRef::Ref(reference)
    }
}

macro_rules! or_ref_from_item {
    ($($item:ty),* $(,)?) => {
        $(
            impl From<$item> for OrRef<$item> {
                fn from(item: $item) -> Self {
                    OrRef::Item(item)
                }
            }
        )*
    };
}

or_ref_from_item!(
    Schema,
    PathItem,
    Parameter,
    RequestBody,
    Response,
    Header,
    Example,
    Link,
    Callback,
    SecurityScheme,
);

pub type SchemaOrRef = OrRef<Schema>;
pub type PathItemOrRef = OrRef<PathItem>;
pub type ParameterOrRef = OrRef<Parameter>;
pub type RequestBodyOrRef = OrRef<RequestBody>;
pub type ResponseOrRef = OrRef<Response>;
pub type HeaderOrRef = OrRef<Header>;
pub type ExampleOrRef = OrRef<Example>;
pub type LinkOrRef = OrRef<Link>;
pub type CallbackOrRef = OrRef<Callback>;
pub type SecuritySchemeOrRef = OrRef<SecurityScheme>;

/// The `type` keyword: one type name or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StringOrArray {
    Single(String),
    Multiple(Vec<String>),
}

impl StringOrArray {
    pub fn contains(&self, name: &str) -> bool {
        match self {
            StringOrArray::Single(single) => single == name,
            StringOrArray::Multiple(names) => names.iter().any(|n| n == name),
        }
    }

    /// Adds a type name, switching to the array form when needed.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.contains(&name) {
            return;
        }
        match self {
            StringOrArray::Single(single) => {
                *self = StringOrArray::Multiple(vec![std::mem::take(single), name]);
            }
            StringOrArray::Multiple(names) => names.push(name),
        }
    }
}

impl From<&str> for StringOrArray {
    fn from(name: &str) -> Self {
        StringOrArray::Single(name.to_owned())
    }
}

impl From<String> for StringOrArray {
    fn from(name: String) -> Self {
        StringOrArray::Single(name)
    }
}

impl From<Vec<String>> for StringOrArray {
    fn from(names: Vec<String>) -> Self {
        StringOrArray::Multiple(names)
    }
}

/// The `items` keyword: one schema or a positional list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Items {
    Single(Box<SchemaOrRef>),
    List(Vec<SchemaOrRef>),
}

/// An empty schema encodes as `{}`, which the decoder cannot place in
/// `items` or `additionalProperties`.
fn warn_if_empty(keyword: &str, schema: &SchemaOrRef) {
    if schema.item().is_some_and(|schema| *schema == Schema::default()) {
        warn!("Empty schema in {} encodes as {{}} and will not decode", keyword);
    }
}

/// Wraps a single schema. An empty `Schema` is accepted but its `{}`
/// output is rejected on decode; use `true` on `additionalProperties` or
/// leave `items` unset instead.
impl From<Schema> for Items {
    fn from(schema: Schema) -> Self {
        Items::from(SchemaOrRef::from(schema))
    }
}

impl From<SchemaOrRef> for Items {
    fn from(schema: SchemaOrRef) -> Self {
        warn_if_empty("items", &schema);
        Items::Single(Box::new(schema))
    }
}

/// The `additionalProperties` keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<SchemaOrRef>),
}

impl From<bool> for AdditionalProperties {
    fn from(allowed: bool) -> Self {
        AdditionalProperties::Allowed(allowed)
    }
}

/// Wraps a schema. As with [`Items`], an empty `Schema` produces `{}`,
/// which does not decode; prefer [`AdditionalProperties::Allowed`].
impl From<Schema> for AdditionalProperties {
    fn from(schema: Schema) -> Self {
        AdditionalProperties::from(SchemaOrRef::from(schema))
    }
}

impl From<SchemaOrRef> for AdditionalProperties {
    fn from(schema: SchemaOrRef) -> Self {
        warn_if_empty("additionalProperties", &schema);
        AdditionalProperties::Schema(Box::new(schema))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        AdditionalProperties, ComponentKind, Items, OrRef, Reference, Schema, SchemaOrRef,
        StringOrArray,
    };
    use serde_json::json;

    #[test]
    fn test_ref_serializes_as_single_key_object() {
        let schema: SchemaOrRef = OrRef::new_ref("#/components/schemas/User");
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"$ref": "#/components/schemas/User"})
        );
        assert!(schema.is_ref());
        assert!(schema.item().is_none());
    }

    #[test]
    fn test_inline_item_has_no_ref_key() {
        let schema: SchemaOrRef = Schema::string().into();
        assert_eq!(serde_json::to_value(&schema).unwrap(), json!({"type": "string"}));
    }

    #[test]
    fn test_component_reference() {
        let reference = Reference::component(ComponentKind::Schemas, "User");
        assert_eq!(reference.as_str(), "#/components/schemas/User");

        let reference = Reference::component(ComponentKind::SecuritySchemes, "api key");
        assert_eq!(reference.as_str(), "#/components/securitySchemes/api%20key");
    }

    #[test]
    fn test_path_reference_is_escaped() {
        let reference = Reference::path("/pets/{id}");
        assert_eq!(reference.as_str(), "#/paths/~1pets~1%7Bid%7D");
    }

    #[test]
    fn test_get_or_insert_item_replaces_ref() {
        let mut schema: SchemaOrRef = OrRef::new_ref("#/components/schemas/User");
        schema.get_or_insert_item_with(Schema::object).description = Some("inline".to_string());
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"type": "object", "description": "inline"})
        );
    }

    #[test]
    fn test_string_or_array_push() {
        let mut types = StringOrArray::from("string");
        assert_eq!(serde_json::to_value(&types).unwrap(), json!("string"));

        types.push("null");
        types.push("null");
        assert_eq!(serde_json::to_value(&types).unwrap(), json!(["string", "null"]));
    }

    #[test]
    fn test_items_and_additional_properties_shapes() {
        let single = Items::from(Schema::integer());
        assert_eq!(serde_json::to_value(&single).unwrap(), json!({"type": "integer"}));

        let list = Items::List(vec![Schema::string().into(), Schema::boolean().into()]);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!([{"type": "string"}, {"type": "boolean"}])
        );

        assert_eq!(
            serde_json::to_value(AdditionalProperties::from(false)).unwrap(),
            json!(false)
        );
        assert_eq!(
            serde_json::to_value(AdditionalProperties::from(Schema::number())).unwrap(),
            json!({"type": "number"})
        );
    }
}
