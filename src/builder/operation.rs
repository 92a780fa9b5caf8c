use crate::builder::PathBuilder;
use crate::model::{
    CallbackOrRef, ExampleOrRef, ExternalDocumentation, HeaderOrRef, LinkOrRef, Operation, OrRef,
    Parameter, ParameterLocation, ParameterOrRef, RequestBody, RequestBodyOrRef, Response,
    Responses, Schema, SchemaOrRef, SecurityRequirement, Server,
};
use crate::types::method::OperationMethod;
use crate::{EXAMPLE_KEY, JSON_MEDIA_TYPE, TEXT_MEDIA_TYPE};
use log::debug;

/// Edits the operation installed on one method slot of a path item.
#[derive(Debug)]
pub struct OperationBuilder {
    path: PathBuilder,
    method: OperationMethod,
}

impl OperationBuilder {
    pub(super) fn new(path: PathBuilder, method: OperationMethod) -> Self {
        Self { path, method }
    }

    pub fn method(&self) -> OperationMethod {
        self.method
    }

    fn operation_mut(&mut self) -> &mut Operation {
        let method = self.method;
        self.path
            .item_mut()
            .slot_mut(method)
            .get_or_insert_with(Operation::default)
    }

    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.operation_mut().tags.push(tag.into());
        self
    }

    pub fn set_summary(mut self, summary: impl Into<String>) -> Self {
        self.operation_mut().summary = Some(summary.into());
        self
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.operation_mut().description = Some(description.into());
        self
    }

    pub fn set_external_docs(
        mut self,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.operation_mut().external_docs = Some(ExternalDocumentation::new(description, url));
        self
    }

    pub fn set_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_mut().operation_id = Some(operation_id.into());
        self
    }

    pub fn set_deprecated(mut self) -> Self {
        self.operation_mut().deprecated = Some(true);
        self
    }

    /// Appends to the operation's parameters.
    pub fn set_parameters<I, P>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParameterOrRef>,
    {
        self.operation_mut()
            .parameters
            .get_or_insert_with(Vec::new)
            .extend(parameters.into_iter().map(Into::into));
        self
    }

    pub fn set_request_body(mut self, request_body: impl Into<RequestBodyOrRef>) -> Self {
        self.operation_mut().request_body = Some(request_body.into());
        self
    }

    pub fn add_security(mut self, requirement: SecurityRequirement) -> Self {
        self.operation_mut()
            .security
            .get_or_insert_with(Vec::new)
            .push(requirement);
        self
    }

    /// Merges into the existing responses; incoming keys win.
    pub fn set_responses(mut self, responses: Responses) -> Self {
        self.operation_mut().responses.extend(responses);
        self
    }

    pub fn add_server(mut self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.operation_mut()
            .servers
            .push(Server::new(url, description));
        self
    }

    fn param(
        mut self,
        location: ParameterLocation,
        name: impl Into<String>,
        schema_type: &str,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        let parameter = Parameter::typed(name, location, schema_type, description, required);
        self.operation_mut()
            .parameters
            .get_or_insert_with(Vec::new)
            .push(parameter.into());
        self
    }

    pub fn param_query(
        self,
        name: impl Into<String>,
        schema_type: &str,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.param(ParameterLocation::Query, name, schema_type, description, required)
    }

    /// Path parameters are always required.
    pub fn param_path(
        self,
        name: impl Into<String>,
        schema_type: &str,
        description: impl Into<String>,
    ) -> Self {
        self.param(ParameterLocation::Path, name, schema_type, description, true)
    }

    pub fn param_header(
        self,
        name: impl Into<String>,
        schema_type: &str,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.param(ParameterLocation::Header, name, schema_type, description, required)
    }

    pub fn param_cookie(
        self,
        name: impl Into<String>,
        schema_type: &str,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.param(ParameterLocation::Cookie, name, schema_type, description, required)
    }

    pub fn request_json(mut self, schema: impl Into<SchemaOrRef>, required: bool) -> Self {
        let body = RequestBody::with_media_type(JSON_MEDIA_TYPE, schema, required);
        self.operation_mut().request_body = Some(body.into());
        self
    }

    /// Installs (or overwrites) the response at `status`.
    pub fn response(mut self, status: u16, response: Response) -> Self {
        self.operation_mut()
            .responses
            .insert(status.to_string(), response.into());
        self
    }

    pub fn response_json(
        self,
        status: u16,
        description: impl Into<String>,
        schema: impl Into<SchemaOrRef>,
    ) -> Self {
        let response = Response::new(description).with_content(JSON_MEDIA_TYPE, schema);
        self.response(status, response)
    }

    pub fn response_text(self, status: u16, description: impl Into<String>) -> Self {
        let response = Response::new(description).with_content(TEXT_MEDIA_TYPE, Schema::string());
        self.response(status, response)
    }

    pub fn response_with_headers<I, S, H>(
        self,
        status: u16,
        description: impl Into<String>,
        schema: impl Into<SchemaOrRef>,
        headers: I,
    ) -> Self
    where
        I: IntoIterator<Item = (S, H)>,
        S: Into<String>,
        H: Into<HeaderOrRef>,
    {
        let mut response = Response::new(description).with_content(JSON_MEDIA_TYPE, schema);
        response.headers.extend(
            headers
                .into_iter()
                .map(|(name, header)| (name.into(), header.into())),
        );
        self.response(status, response)
    }

    /// Registers `example` under the `example` key of the response's media
    /// type, creating the media type entry if needed.
    ///
    /// Does nothing when no inline response exists at `status`.
    pub fn example(
        mut self,
        status: u16,
        media_type: impl Into<String>,
        example: impl Into<ExampleOrRef>,
    ) -> Self {
        let key = status.to_string();
        let method = self.method;
        match self
            .operation_mut()
            .responses
            .get_mut(&key)
            .and_then(OrRef::item_mut)
        {
            Some(response) => {
                response
                    .content
                    .entry(media_type.into())
                    .or_default()
                    .examples
                    .insert(EXAMPLE_KEY.to_string(), example.into());
            }
            None => debug!("No response {} on {}, example ignored", key, method),
        }
        self
    }

    /// Registers `link` under `name` on the response at `status`.
    ///
    /// Does nothing when no inline response exists at `status`.
    pub fn link(mut self, status: u16, name: impl Into<String>, link: impl Into<LinkOrRef>) -> Self {
        let key = status.to_string();
        let method = self.method;
        match self
            .operation_mut()
            .responses
            .get_mut(&key)
            .and_then(OrRef::item_mut)
        {
            Some(response) => {
                response.links.insert(name.into(), link.into());
            }
            None => debug!("No response {} on {}, link ignored", key, method),
        }
        self
    }

    pub fn callback(mut self, name: impl Into<String>, callback: impl Into<CallbackOrRef>) -> Self {
        self.operation_mut()
            .callbacks
            .insert(name.into(), callback.into());
        self
    }

    pub fn done_op(self) -> PathBuilder {
        self.path
    }
}
