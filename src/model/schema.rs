use crate::model::{
    AdditionalProperties, Extensions, ExternalDocumentation, Items, SchemaOrRef, StringOrArray,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

/// The JSON Schema 2020-12 subset used by OpenAPI 3.1.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<StringOrArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<SchemaOrRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<SchemaOrRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<SchemaOrRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<SchemaOrRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaOrRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub pattern_properties: IndexMap<String, SchemaOrRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefix_items: Vec<SchemaOrRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Box<SchemaOrRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_contains: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_contains: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Schema {
    /// A schema carrying only `{"type": schema_type}`.
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: Some(StringOrArray::from(schema_type)),
            ..Self::default()
        }
    }

    pub fn object() -> Self {
        Self::of_type("object")
    }

    pub fn array() -> Self {
        Self::of_type("array")
    }

    pub fn string() -> Self {
        Self::of_type("string")
    }

    pub fn integer() -> Self {
        Self::of_type("integer")
    }

    pub fn number() -> Self {
        Self::of_type("number")
    }

    pub fn boolean() -> Self {
        Self::of_type("boolean")
    }

    pub fn with_property(mut self, name: impl Into<String>, schema: impl Into<SchemaOrRef>) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema.into());
        self
    }

    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let required = self.required.get_or_insert_with(Vec::new);
        if !required.contains(&name) {
            required.push(name);
        }
        self
    }

    pub fn with_items(mut self, items: impl Into<Items>) -> Self {
        self.items = Some(items.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds `"null"` to the accepted types.
    pub fn nullable(mut self) -> Self {
        match self.schema_type.as_mut() {
            Some(types) => types.push("null"),
            None => self.schema_type = Some(StringOrArray::from("null")),
        }
        self
    }
}

/// Selects a `oneOf`/`anyOf` branch by the value of a property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    pub property_name: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub mapping: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Xml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,
}

#[cfg(test)]
mod tests {
    use crate::model::{AdditionalProperties, Schema, SchemaOrRef};
    use pretty_assertions::assert_eq;
    use serde_json::{Number, json};

    #[test]
    fn test_string_schema_is_exactly_type() {
        assert_eq!(
            serde_json::to_string(&Schema::string()).unwrap(),
            r#"{"type":"string"}"#
        );
    }

    #[test]
    fn test_factories_use_single_type() {
        for (schema, name) in [
            (Schema::object(), "object"),
            (Schema::array(), "array"),
            (Schema::string(), "string"),
            (Schema::integer(), "integer"),
            (Schema::number(), "number"),
            (Schema::boolean(), "boolean"),
        ] {
            assert_eq!(serde_json::to_value(&schema).unwrap(), json!({"type": name}));
        }
    }

    #[test]
    fn test_object_schema_helpers() {
        let mut schema = Schema::object()
            .with_property("id", Schema::integer().with_format("int64"))
            .with_property("owner", SchemaOrRef::new_ref("#/components/schemas/User"))
            .with_property("tags", Schema::array().with_items(Schema::string()))
            .with_required("id")
            .with_required("id");
        schema.additional_properties = Some(AdditionalProperties::from(false));

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "id": {"type": "integer", "format": "int64"},
                    "owner": {"$ref": "#/components/schemas/User"},
                    "tags": {"type": "array", "items": {"type": "string"}}
                },
                "required": ["id"],
                "additionalProperties": false
            })
        );
    }

    #[test]
    fn test_nullable_switches_to_array_form() {
        assert_eq!(
            serde_json::to_value(Schema::string().nullable()).unwrap(),
            json!({"type": ["string", "null"]})
        );
        assert_eq!(
            serde_json::to_value(Schema::default().nullable()).unwrap(),
            json!({"type": "null"})
        );
    }

    #[test]
    fn test_numeric_keywords_keep_number_form() {
        let mut schema = Schema::number();
        schema.minimum = Some(Number::from(0));
        schema.exclusive_maximum = Number::from_f64(1.5);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"type": "number", "minimum": 0, "exclusiveMaximum": 1.5})
        );
    }

    #[test]
    fn test_emitted_schema_is_valid_against_meta_schema() {
        let schema = Schema::object()
            .with_property("name", Schema::string().with_description("Pet name"))
            .with_property("age", Schema::integer().nullable())
            .with_required("name");
        let value = serde_json::to_value(&schema).unwrap();
        assert!(jsonschema::meta::is_valid(&value));
    }
}
