//! Chainable construction of a [`Document`].
//!
//! Every builder takes `self` by value and hands back the next state:
//! [`Builder::path`] yields a [`PathBuilder`], whose method calls yield an
//! [`OperationBuilder`]; `done_op` and `done_path` walk back up. The document
//! is valid after every call, so [`Builder::build`] and [`Builder::json`]
//! can be used at any point.

mod operation;
mod path;

pub use operation::OperationBuilder;
pub use path::PathBuilder;

use crate::PATH_SEPARATOR;
use crate::codec::to_string_pretty;
use crate::error::EncodeError;
use crate::model::{
    Components, Contact, Document, ExternalDocumentation, License, OrRef, ParameterOrRef,
    PathItem, PathItemOrRef, ResponseOrRef, SchemaOrRef, SecurityRequirement,
    SecuritySchemeOrRef, Server, Tag,
};
use log::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct Builder {
    document: Document,
}

/// Trims each part and joins them with single spaces.
pub(crate) fn join_and_trim<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|part| part.as_ref().trim().to_owned())
        .collect::<Vec<String>>()
        .join(" ")
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.document.info.title = title.into();
        self
    }

    pub fn set_version(mut self, version: impl Into<String>) -> Self {
        self.document.info.version = version.into();
        self
    }

    pub fn set_summary<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.document.info.summary = Some(join_and_trim(parts));
        self
    }

    pub fn set_description<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.document.info.description = Some(join_and_trim(parts));
        self
    }

    pub fn set_terms_of_service<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.document.info.terms_of_service = Some(join_and_trim(parts));
        self
    }

    pub fn set_contact(mut self, contact: Contact) -> Self {
        self.document.info.contact = Some(contact);
        self
    }

    pub fn set_license(mut self, license: License) -> Self {
        self.document.info.license = Some(license);
        self
    }

    pub fn set_json_schema_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.document.json_schema_dialect = Some(dialect.into());
        self
    }

    pub fn add_server(mut self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.document.servers.push(Server::new(url, description));
        self
    }

    pub fn add_schema(mut self, name: impl Into<String>, schema: impl Into<SchemaOrRef>) -> Self {
        self.components_mut()
            .schemas
            .insert(name.into(), schema.into());
        self
    }

    pub fn add_security_scheme(
        mut self,
        name: impl Into<String>,
        scheme: impl Into<SecuritySchemeOrRef>,
    ) -> Self {
        self.components_mut()
            .security_schemes
            .insert(name.into(), scheme.into());
        self
    }

    pub fn add_component_response(
        mut self,
        name: impl Into<String>,
        response: impl Into<ResponseOrRef>,
    ) -> Self {
        self.components_mut()
            .responses
            .insert(name.into(), response.into());
        self
    }

    pub fn add_component_parameter(
        mut self,
        name: impl Into<String>,
        parameter: impl Into<ParameterOrRef>,
    ) -> Self {
        self.components_mut()
            .parameters
            .insert(name.into(), parameter.into());
        self
    }

    /// Appends a document-wide security requirement.
    pub fn security(mut self, requirement: SecurityRequirement) -> Self {
        self.document
            .security
            .get_or_insert_with(Vec::new)
            .push(requirement);
        self
    }

    pub fn add_tag(mut self, tag: Tag) -> Self {
        self.document.tags.push(tag);
        self
    }

    pub fn external_docs(mut self, description: impl Into<String>, url: impl Into<String>) -> Self {
        self.document.external_docs = Some(ExternalDocumentation::new(description, url));
        self
    }

    pub fn add_webhook(mut self, name: impl Into<String>, item: impl Into<PathItemOrRef>) -> Self {
        self.document.webhooks.insert(name.into(), item.into());
        self
    }

    /// Starts editing the path item at `path`.
    ///
    /// An existing item is reused, so operations added on different methods
    /// accumulate. A `$ref` entry is replaced by an empty inline item.
    pub fn path(mut self, path: impl Into<String>) -> PathBuilder {
        let path = path.into();
        if !path.starts_with(PATH_SEPARATOR) {
            warn!("Path '{}' does not start with '{}'", path, PATH_SEPARATOR);
        }
        let paths = self.document.paths_mut();
        match paths.get_mut(&path) {
            Some(OrRef::Item(_)) => debug!("Reusing path item {}", path),
            Some(entry) => {
                debug!("Replacing reference at {} with an inline path item", path);
                *entry = OrRef::Item(PathItem::new());
            }
            None => {
                paths.insert(path.clone(), OrRef::Item(PathItem::new()));
            }
        }
        PathBuilder::new(self, path)
    }

    pub fn build(&self) -> &Document {
        &self.document
    }

    /// Direct access for edits the builder has no shortcut for.
    pub fn build_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// The document as JSON indented by two spaces.
    pub fn json(&self) -> Result<String, EncodeError> {
        to_string_pretty(&self.document)
    }

    fn components_mut(&mut self) -> &mut Components {
        self.document
            .components
            .get_or_insert_with(Components::default)
    }
}
