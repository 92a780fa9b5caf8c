use crate::model::{
    CallbackOrRef, Extensions, ExternalDocumentation, ParameterOrRef, PathItemOrRef,
    RequestBodyOrRef, ResponseOrRef, SecurityRequirement, Server,
};
use crate::types::method::OperationMethod;
use indexmap::IndexMap;
use serde::Serialize;

/// URL template to path item, in insertion order.
pub type Paths = IndexMap<String, PathItemOrRef>;

/// Status code (or `default`) to response.
pub type Responses = IndexMap<String, ResponseOrRef>;

/// The operations available on a single path.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterOrRef>>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation(&self, method: OperationMethod) -> Option<&Operation> {
        match method {
            OperationMethod::Get => self.get.as_ref(),
            OperationMethod::Put => self.put.as_ref(),
            OperationMethod::Post => self.post.as_ref(),
            OperationMethod::Delete => self.delete.as_ref(),
            OperationMethod::Options => self.options.as_ref(),
            OperationMethod::Head => self.head.as_ref(),
            OperationMethod::Patch => self.patch.as_ref(),
            OperationMethod::Trace => self.trace.as_ref(),
        }
    }

    pub fn operation_mut(&mut self, method: OperationMethod) -> Option<&mut Operation> {
        self.slot_mut(method).as_mut()
    }

    /// The slot itself, so callers can fill an empty one.
    pub fn slot_mut(&mut self, method: OperationMethod) -> &mut Option<Operation> {
        match method {
            OperationMethod::Get => &mut self.get,
            OperationMethod::Put => &mut self.put,
            OperationMethod::Post => &mut self.post,
            OperationMethod::Delete => &mut self.delete,
            OperationMethod::Options => &mut self.options,
            OperationMethod::Head => &mut self.head,
            OperationMethod::Patch => &mut self.patch,
            OperationMethod::Trace => &mut self.trace,
        }
    }

    /// Installs `operation`, returning whatever occupied the slot before.
    pub fn set_operation(
        &mut self,
        method: OperationMethod,
        operation: Operation,
    ) -> Option<Operation> {
        self.slot_mut(method).replace(operation)
    }

    /// Populated slots in get, put, post, delete, options, head, patch, trace order.
    pub fn operations(&self) -> impl Iterator<Item = (OperationMethod, &Operation)> {
        OperationMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|operation| (method, operation)))
    }

    /// Looks up the operation for an HTTP request method.
    pub fn operation_for(&self, method: &http::Method) -> Option<&Operation> {
        OperationMethod::try_from(method)
            .ok()
            .and_then(|method| self.operation(method))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterOrRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodyOrRef>,
    pub responses: Responses,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub callbacks: IndexMap<String, CallbackOrRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Operation {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }
}

/// Runtime expression (e.g. `{$request.body#/callbackUrl}`) to path item.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Callback(pub IndexMap<String, PathItemOrRef>);

impl Callback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expression(
        mut self,
        expression: impl Into<String>,
        item: impl Into<PathItemOrRef>,
    ) -> Self {
        self.0.insert(expression.into(), item.into());
        self
    }
}
