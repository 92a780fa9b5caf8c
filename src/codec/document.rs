use crate::codec::{Decode, Fields};
use crate::error::DecodeError;
use crate::model::{
    Components, Contact, Document, ExternalDocumentation, Info, License, Server, ServerVariable,
    Tag,
};
use crate::types::json_path::JsonPath;
use serde_json::Value;

impl Decode for Document {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Document {
            openapi: fields.required("openapi")?,
            info: fields.required("info")?,
            json_schema_dialect: fields.optional("jsonSchemaDialect")?,
            servers: fields.or_default("servers")?,
            paths: fields.optional("paths")?,
            webhooks: fields.or_default("webhooks")?,
            components: fields.optional("components")?,
            security: fields.optional("security")?,
            tags: fields.or_default("tags")?,
            external_docs: fields.optional("externalDocs")?,
            extensions: fields.extensions(),
        })
    }
}

impl Decode for Info {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Info {
            title: fields.required("title")?,
            version: fields.required("version")?,
            summary: fields.optional("summary")?,
            description: fields.optional("description")?,
            terms_of_service: fields.optional("termsOfService")?,
            contact: fields.optional("contact")?,
            license: fields.optional("license")?,
            extensions: fields.extensions(),
        })
    }
}

impl Decode for Contact {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Contact {
            name: fields.optional("name")?,
            url: fields.optional("url")?,
            email: fields.optional("email")?,
        })
    }
}

impl Decode for License {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(License {
            name: fields.required("name")?,
            identifier: fields.optional("identifier")?,
            url: fields.optional("url")?,
        })
    }
}

impl Decode for Server {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Server {
            url: fields.required("url")?,
            description: fields.optional("description")?,
            variables: fields.or_default("variables")?,
        })
    }
}

impl Decode for ServerVariable {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(ServerVariable {
            enum_values: fields.or_default("enum")?,
            default: fields.required("default")?,
            description: fields.optional("description")?,
        })
    }
}

impl Decode for Tag {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Tag {
            name: fields.required("name")?,
            description: fields.optional("description")?,
            external_docs: fields.optional("externalDocs")?,
        })
    }
}

impl Decode for ExternalDocumentation {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(ExternalDocumentation {
            description: fields.optional("description")?,
            url: fields.required("url")?,
        })
    }
}

impl Decode for Components {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Components {
            schemas: fields.or_default("schemas")?,
            responses: fields.or_default("responses")?,
            parameters: fields.or_default("parameters")?,
            examples: fields.or_default("examples")?,
            request_bodies: fields.or_default("requestBodies")?,
            headers: fields.or_default("headers")?,
            security_schemes: fields.or_default("securitySchemes")?,
            links: fields.or_default("links")?,
            callbacks: fields.or_default("callbacks")?,
            path_items: fields.or_default("pathItems")?,
        })
    }
}
