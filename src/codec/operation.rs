use crate::codec::{Decode, Fields};
use crate::error::DecodeError;
use crate::model::{
    Callback, Encoding, Example, Header, Link, MediaType, Operation, Parameter, PathItem,
    PathItemOrRef, RequestBody, Response,
};
use crate::types::json_path::JsonPath;
use indexmap::IndexMap;
use serde_json::Value;

const LOCATIONS: &str = "one of query, header, path, cookie";
const STYLES: &str =
    "one of matrix, label, form, simple, spaceDelimited, pipeDelimited, deepObject";

impl Decode for PathItem {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(PathItem {
            summary: fields.optional("summary")?,
            description: fields.optional("description")?,
            get: fields.optional("get")?,
            put: fields.optional("put")?,
            post: fields.optional("post")?,
            delete: fields.optional("delete")?,
            options: fields.optional("options")?,
            head: fields.optional("head")?,
            patch: fields.optional("patch")?,
            trace: fields.optional("trace")?,
            servers: fields.or_default("servers")?,
            parameters: fields.optional("parameters")?,
            extensions: fields.extensions(),
        })
    }
}

impl Decode for Operation {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Operation {
            tags: fields.or_default("tags")?,
            summary: fields.optional("summary")?,
            description: fields.optional("description")?,
            external_docs: fields.optional("externalDocs")?,
            operation_id: fields.optional("operationId")?,
            parameters: fields.optional("parameters")?,
            request_body: fields.optional("requestBody")?,
            responses: fields.or_default("responses")?,
            callbacks: fields.or_default("callbacks")?,
            deprecated: fields.optional("deprecated")?,
            security: fields.optional("security")?,
            servers: fields.or_default("servers")?,
            extensions: fields.extensions(),
        })
    }
}

impl Decode for Callback {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        IndexMap::<String, PathItemOrRef>::decode(value, path).map(Callback)
    }
}

impl Decode for Parameter {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Parameter {
            name: fields.required("name")?,
            location: fields.required_enumeration("in", LOCATIONS)?,
            description: fields.optional("description")?,
            required: fields.optional("required")?,
            deprecated: fields.optional("deprecated")?,
            allow_empty_value: fields.optional("allowEmptyValue")?,
            style: fields.enumeration("style", STYLES)?,
            explode: fields.optional("explode")?,
            allow_reserved: fields.optional("allowReserved")?,
            schema: fields.optional("schema")?,
            example: fields.value("example"),
            examples: fields.or_default("examples")?,
            content: fields.or_default("content")?,
            extensions: fields.extensions(),
        })
    }
}

impl Decode for Header {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Header {
            description: fields.optional("description")?,
            required: fields.optional("required")?,
            deprecated: fields.optional("deprecated")?,
            allow_empty_value: fields.optional("allowEmptyValue")?,
            style: fields.enumeration("style", STYLES)?,
            explode: fields.optional("explode")?,
            allow_reserved: fields.optional("allowReserved")?,
            schema: fields.optional("schema")?,
            example: fields.value("example"),
            examples: fields.or_default("examples")?,
            content: fields.or_default("content")?,
            extensions: fields.extensions(),
        })
    }
}

impl Decode for RequestBody {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(RequestBody {
            description: fields.optional("description")?,
            content: fields.required("content")?,
            required: fields.optional("required")?,
        })
    }
}

impl Decode for MediaType {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(MediaType {
            schema: fields.optional("schema")?,
            example: fields.value("example"),
            examples: fields.or_default("examples")?,
            encoding: fields.or_default("encoding")?,
        })
    }
}

impl Decode for Encoding {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Encoding {
            content_type: fields.optional("contentType")?,
            headers: fields.or_default("headers")?,
            style: fields.enumeration("style", STYLES)?,
            explode: fields.optional("explode")?,
            allow_reserved: fields.optional("allowReserved")?,
        })
    }
}

impl Decode for Response {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Response {
            description: fields.required("description")?,
            headers: fields.or_default("headers")?,
            content: fields.or_default("content")?,
            links: fields.or_default("links")?,
            extensions: fields.extensions(),
        })
    }
}

impl Decode for Example {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Example {
            summary: fields.optional("summary")?,
            description: fields.optional("description")?,
            value: fields.value("value"),
            external_value: fields.optional("externalValue")?,
        })
    }
}

impl Decode for Link {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Link {
            operation_ref: fields.optional("operationRef")?,
            operation_id: fields.optional("operationId")?,
            parameters: fields.or_default("parameters")?,
            request_body: fields.value("requestBody"),
            description: fields.optional("description")?,
            server: fields.optional("server")?,
        })
    }
}
