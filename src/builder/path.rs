use crate::builder::{Builder, OperationBuilder};
use crate::model::{Operation, OrRef, ParameterOrRef, PathItem, Server};
use crate::types::method::OperationMethod;
use log::debug;

/// Edits the path item registered under one URL template.
#[derive(Debug)]
pub struct PathBuilder {
    builder: Builder,
    path: String,
}

impl PathBuilder {
    pub(super) fn new(builder: Builder, path: String) -> Self {
        Self { builder, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub(super) fn item_mut(&mut self) -> &mut PathItem {
        self.builder
            .document
            .paths_mut()
            .entry(self.path.clone())
            .or_insert_with(|| OrRef::Item(PathItem::new()))
            .get_or_insert_item_with(PathItem::new)
    }

    /// Installs a fresh operation on `method`, replacing any previous one.
    pub fn operation(mut self, method: OperationMethod, summary: impl Into<String>) -> OperationBuilder {
        let replaced = self
            .item_mut()
            .set_operation(method, Operation::new(summary));
        if replaced.is_some() {
            debug!("Replaced {} operation on {}", method, self.path);
        }
        OperationBuilder::new(self, method)
    }

    pub fn get(self, summary: impl Into<String>) -> OperationBuilder {
        self.operation(OperationMethod::Get, summary)
    }

    pub fn put(self, summary: impl Into<String>) -> OperationBuilder {
        self.operation(OperationMethod::Put, summary)
    }

    pub fn post(self, summary: impl Into<String>) -> OperationBuilder {
        self.operation(OperationMethod::Post, summary)
    }

    pub fn delete(self, summary: impl Into<String>) -> OperationBuilder {
        self.operation(OperationMethod::Delete, summary)
    }

    pub fn options(self, summary: impl Into<String>) -> OperationBuilder {
        self.operation(OperationMethod::Options, summary)
    }

    pub fn head(self, summary: impl Into<String>) -> OperationBuilder {
        self.operation(OperationMethod::Head, summary)
    }

    pub fn patch(self, summary: impl Into<String>) -> OperationBuilder {
        self.operation(OperationMethod::Patch, summary)
    }

    pub fn trace(self, summary: impl Into<String>) -> OperationBuilder {
        self.operation(OperationMethod::Trace, summary)
    }

    pub fn set_summary(mut self, summary: impl Into<String>) -> Self {
        self.item_mut().summary = Some(summary.into());
        self
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.item_mut().description = Some(description.into());
        self
    }

    /// Appends a parameter shared by every operation on this path.
    pub fn add_parameter(mut self, parameter: impl Into<ParameterOrRef>) -> Self {
        self.item_mut()
            .parameters
            .get_or_insert_with(Vec::new)
            .push(parameter.into());
        self
    }

    pub fn add_server(mut self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.item_mut().servers.push(Server::new(url, description));
        self
    }

    pub fn done_path(self) -> Builder {
        self.builder
    }
}
