use crate::REF_FIELD;
use crate::codec::Decode;
use crate::codec::fields::require_str;
use crate::error::DecodeError;
use crate::model::{AdditionalProperties, Items, OrRef, Reference, SchemaOrRef, StringOrArray};
use crate::types::json_path::JsonPath;
use log::trace;
use serde_json::Value;

impl<T: Decode> Decode for OrRef<T> {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let Value::Object(object) = value else {
            return Err(DecodeError::type_mismatch("object", value, path));
        };
        match object.get(REF_FIELD) {
            Some(Value::String(reference)) => {
                trace!("Reference {} at {}", reference, path);
                Ok(OrRef::Ref(Reference::new(reference.as_str())))
            }
            Some(other) => Err(DecodeError::ref_shape(other, &path.key(REF_FIELD))),
            None => T::decode(value, path).map(OrRef::Item),
        }
    }
}

impl Decode for StringOrArray {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        match value {
            Value::String(single) => Ok(StringOrArray::Single(single.clone())),
            Value::Array(names) => names
                .iter()
                .enumerate()
                .map(|(index, name)| require_str(name, &path.index(index)).map(str::to_owned))
                .collect::<Result<Vec<String>, DecodeError>>()
                .map(StringOrArray::Multiple),
            _ => Err(DecodeError::type_mismatch(
                "string or array of strings",
                value,
                path,
            )),
        }
    }
}

impl Decode for Items {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        match value {
            Value::Object(object) if !object.is_empty() => {
                trace!("Single items schema at {}", path);
                SchemaOrRef::decode(value, path).map(|schema| Items::Single(Box::new(schema)))
            }
            Value::Array(_) => {
                trace!("Items list at {}", path);
                Vec::<SchemaOrRef>::decode(value, path).map(Items::List)
            }
            _ => Err(DecodeError::union_undecidable("items", value, path)),
        }
    }
}

impl Decode for AdditionalProperties {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(allowed) => Ok(AdditionalProperties::Allowed(*allowed)),
            Value::Object(object) if !object.is_empty() => SchemaOrRef::decode(value, path)
                .map(|schema| AdditionalProperties::Schema(Box::new(schema))),
            _ => Err(DecodeError::union_undecidable(
                "additionalProperties",
                value,
                path,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::{from_str, from_value, to_string};
    use crate::error::DecodeErrorKind;
    use crate::model::{
        AdditionalProperties, Items, ParameterOrRef, Schema, SchemaOrRef, StringOrArray,
    };
    use crate::types::primitive::JsonKind;
    use serde_json::json;

    #[test]
    fn test_ref_round_trip() {
        let input = r##"{"$ref":"#/components/schemas/User"}"##;
        let schema: SchemaOrRef = from_str(input).unwrap();
        assert_eq!(
            schema.reference().map(|r| r.as_str()),
            Some("#/components/schemas/User")
        );
        assert_eq!(to_string(&schema).unwrap(), input);
    }

    #[test]
    fn test_ref_wins_over_sibling_keys() {
        let schema: SchemaOrRef =
            from_value(&json!({"$ref": "#/components/schemas/User", "description": "x"})).unwrap();
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"$ref": "#/components/schemas/User"})
        );
    }

    #[test]
    fn test_inline_item_stays_inline() {
        let parameter: ParameterOrRef =
            from_value(&json!({"name": "id", "in": "path", "required": true})).unwrap();
        assert!(!parameter.is_ref());
        let value = serde_json::to_value(&parameter).unwrap();
        assert!(value.get("$ref").is_none());
    }

    #[test]
    fn test_non_string_ref_is_ref_shape() {
        let err = from_value::<SchemaOrRef>(&json!({"$ref": 42})).unwrap_err();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::RefShape {
                found: JsonKind::Integer
            }
        );
        assert_eq!(err.path().to_string(), ".$ref");
    }

    #[test]
    fn test_string_or_array() {
        assert_eq!(
            from_value::<StringOrArray>(&json!("string")).unwrap(),
            StringOrArray::Single("string".to_string())
        );
        assert_eq!(
            from_value::<StringOrArray>(&json!(["string", "null"])).unwrap(),
            StringOrArray::Multiple(vec!["string".to_string(), "null".to_string()])
        );

        let err = from_value::<StringOrArray>(&json!(["string", 1])).unwrap_err();
        assert_eq!(err.path().to_string(), "[1]");
    }

    #[test]
    fn test_type_number_is_type_mismatch_at_type() {
        let err = from_str::<Schema>(r#"{"type":123}"#).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorKind::TypeMismatch {
                found: JsonKind::Integer,
                ..
            }
        ));
        assert_eq!(err.path().to_string(), ".type");
    }

    #[test]
    fn test_items_shapes() {
        let single = from_value::<Items>(&json!({"type": "string"})).unwrap();
        assert!(matches!(single, Items::Single(_)));

        let list = from_value::<Items>(&json!([{"type": "string"}, {"$ref": "#/x"}])).unwrap();
        assert!(matches!(list, Items::List(ref schemas) if schemas.len() == 2));
    }

    #[test]
    fn test_items_undecidable() {
        for input in [json!(123), json!({}), json!("string")] {
            let err = from_value::<Items>(&input).unwrap_err();
            assert!(matches!(
                err.kind(),
                DecodeErrorKind::UnionUndecidable { union: "items", .. }
            ));
        }
    }

    #[test]
    fn test_additional_properties_shapes() {
        assert_eq!(
            from_value::<AdditionalProperties>(&json!(true)).unwrap(),
            AdditionalProperties::Allowed(true)
        );
        assert_eq!(
            from_value::<AdditionalProperties>(&json!({"type": "integer"})).unwrap(),
            AdditionalProperties::from(Schema::integer())
        );

        let err = from_value::<AdditionalProperties>(&json!({})).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorKind::UnionUndecidable {
                found: JsonKind::Object,
                ..
            }
        ));

        let err = from_value::<Schema>(&json!({"type": "object", "additionalProperties": 123}))
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorKind::UnionUndecidable {
                found: JsonKind::Integer,
                ..
            }
        ));
        assert_eq!(err.path().to_string(), ".additionalProperties");
    }

    #[test]
    fn test_empty_schema_does_not_read_back() {
        let schema = Schema::object().with_items(Schema::default());
        let json = to_string(&schema).unwrap();
        assert_eq!(json, r#"{"type":"object","items":{}}"#);
        assert!(from_str::<Schema>(&json).is_err());

        let mut schema = Schema::object();
        schema.additional_properties = Some(AdditionalProperties::from(Schema::default()));
        let err = from_str::<Schema>(&to_string(&schema).unwrap()).unwrap_err();
        assert_eq!(err.path().to_string(), ".additionalProperties");
    }

    #[test]
    fn test_nested_error_path() {
        let err = from_value::<Schema>(&json!({
            "type": "array",
            "items": {"type": "object", "properties": {"id": {"type": false}}}
        }))
        .unwrap_err();
        assert_eq!(err.path().to_string(), ".items.properties.id.type");
    }
}
