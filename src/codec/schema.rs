use crate::codec::{Decode, Fields};
use crate::error::DecodeError;
use crate::model::{Discriminator, Schema, Xml};
use crate::types::json_path::JsonPath;
use serde_json::Value;

impl Decode for Schema {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Schema {
            schema_type: fields.optional("type")?,
            format: fields.optional("format")?,
            title: fields.optional("title")?,
            description: fields.optional("description")?,
            default: fields.value("default"),
            deprecated: fields.optional("deprecated")?,
            read_only: fields.optional("readOnly")?,
            write_only: fields.optional("writeOnly")?,
            examples: fields.or_default("examples")?,
            enum_values: fields.optional("enum")?,
            const_value: fields.value("const"),
            all_of: fields.or_default("allOf")?,
            one_of: fields.or_default("oneOf")?,
            any_of: fields.or_default("anyOf")?,
            not: fields.optional("not")?,
            properties: fields.optional("properties")?,
            required: fields.optional("required")?,
            additional_properties: fields.optional("additionalProperties")?,
            pattern_properties: fields.or_default("patternProperties")?,
            min_properties: fields.optional("minProperties")?,
            max_properties: fields.optional("maxProperties")?,
            items: fields.optional("items")?,
            prefix_items: fields.or_default("prefixItems")?,
            min_items: fields.optional("minItems")?,
            max_items: fields.optional("maxItems")?,
            unique_items: fields.optional("uniqueItems")?,
            contains: fields.optional("contains")?,
            min_contains: fields.optional("minContains")?,
            max_contains: fields.optional("maxContains")?,
            min_length: fields.optional("minLength")?,
            max_length: fields.optional("maxLength")?,
            pattern: fields.optional("pattern")?,
            multiple_of: fields.optional("multipleOf")?,
            minimum: fields.optional("minimum")?,
            exclusive_minimum: fields.optional("exclusiveMinimum")?,
            maximum: fields.optional("maximum")?,
            exclusive_maximum: fields.optional("exclusiveMaximum")?,
            discriminator: fields.optional("discriminator")?,
            xml: fields.optional("xml")?,
            external_docs: fields.optional("externalDocs")?,
            extensions: fields.extensions(),
        })
    }
}

impl Decode for Discriminator {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Discriminator {
            property_name: fields.required("propertyName")?,
            mapping: fields.or_default("mapping")?,
        })
    }
}

impl Decode for Xml {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Xml {
            name: fields.optional("name")?,
            namespace: fields.optional("namespace")?,
            prefix: fields.optional("prefix")?,
            attribute: fields.optional("attribute")?,
            wrapped: fields.optional("wrapped")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::from_value;
    use crate::error::DecodeErrorKind;
    use crate::model::{Items, Schema};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_full_schema_round_trip() {
        let input = json!({
            "type": ["object", "null"],
            "title": "Pet",
            "description": "",
            "default": null,
            "examples": [{"name": "Rex"}],
            "allOf": [{"$ref": "#/components/schemas/Base"}],
            "properties": {
                "name": {"type": "string", "minLength": 1, "maxLength": 64, "pattern": "^[A-Z]"},
                "kind": {"enum": ["cat", "dog"]},
                "weight": {"type": "number", "exclusiveMinimum": 0, "multipleOf": 0.5},
                "tags": {"type": "array", "prefixItems": [{"type": "string"}], "uniqueItems": true}
            },
            "required": ["name"],
            "additionalProperties": {"type": "string"},
            "discriminator": {"propertyName": "kind", "mapping": {"cat": "#/components/schemas/Cat"}},
            "xml": {"name": "pet", "wrapped": false},
            "x-internal": true
        });

        let schema: Schema = from_value(&input).unwrap();
        assert_eq!(schema.default, Some(json!(null)));
        assert_eq!(schema.extensions.get("x-internal"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&schema).unwrap(), input);
    }

    #[test]
    fn test_unknown_keywords_are_dropped() {
        let schema: Schema = from_value(&json!({"type": "string", "nonsense": 1})).unwrap();
        assert_eq!(schema, Schema::string());
    }

    #[test]
    fn test_nested_items_decode() {
        let schema: Schema =
            from_value(&json!({"type": "array", "items": {"type": "integer"}})).unwrap();
        assert_eq!(schema.items, Some(Items::from(Schema::integer())));
    }

    #[test]
    fn test_negative_length_is_type_mismatch() {
        let err = from_value::<Schema>(&json!({"minLength": -1})).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::TypeMismatch { .. }));
        assert_eq!(err.path().to_string(), ".minLength");
    }

    #[test]
    fn test_discriminator_requires_property_name() {
        let err = from_value::<Schema>(&json!({"discriminator": {}})).unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::MissingField("propertyName"));
        assert_eq!(err.path().to_string(), ".discriminator.propertyName");
    }
}
