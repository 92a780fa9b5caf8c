use crate::PATH_SEPARATOR;
use crate::error::ValidationError;
use crate::model::{Document, Operation, PathItem, PathItemOrRef};
use crate::types::json_path::JsonPath;
use crate::types::version::OpenApiVersion;
use indexmap::IndexMap;
use log::debug;
use std::str::FromStr;

impl Operation {
    /// Fails when the operation declares no responses.
    pub fn validate_required_responses(&self) -> Result<(), ValidationError> {
        self.check_responses(&JsonPath::new())
    }

    fn check_responses(&self, path: &JsonPath) -> Result<(), ValidationError> {
        if self.responses.is_empty() {
            return Err(ValidationError::EmptyResponses(path.key("responses")));
        }
        Ok(())
    }
}

impl Document {
    /// Runs the presence checks on the whole document.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The document is fit to hand to downstream tools
    /// * `Err(ValidationError)` - The first problem found, in document order
    pub fn validate(&self) -> Result<(), ValidationError> {
        let version = OpenApiVersion::from_str(&self.openapi)?;
        if !version.is_supported() {
            return Err(ValidationError::UnsupportedVersion(self.openapi.clone()));
        }

        let info = JsonPath::new().key("info");
        if self.info.title.is_empty() {
            return Err(ValidationError::EmptyField(info.key("title")));
        }
        if self.info.version.is_empty() {
            return Err(ValidationError::EmptyField(info.key("version")));
        }

        if let Some(paths) = &self.paths {
            for key in paths.keys() {
                if !key.starts_with(PATH_SEPARATOR) {
                    return Err(ValidationError::InvalidPathKey(key.clone()));
                }
            }
            validate_items(paths, &JsonPath::new().key("paths"))?;
        }
        validate_items(&self.webhooks, &JsonPath::new().key("webhooks"))?;

        if let Some(components) = &self.components {
            let path = JsonPath::new().key("components").key("pathItems");
            validate_items(&components.path_items, &path)?;
        }
        Ok(())
    }
}

fn validate_items(
    items: &IndexMap<String, PathItemOrRef>,
    path: &JsonPath,
) -> Result<(), ValidationError> {
    for (key, item) in items {
        match item.item() {
            Some(item) => validate_path_item(item, &path.key(key))?,
            None => debug!("Skipping referenced path item at {}", path.key(key)),
        }
    }
    Ok(())
}

fn validate_path_item(item: &PathItem, path: &JsonPath) -> Result<(), ValidationError> {
    for (method, operation) in item.operations() {
        let path = path.key(method.as_str());
        operation.check_responses(&path)?;
        for (name, callback) in &operation.callbacks {
            if let Some(callback) = callback.item() {
                validate_items(&callback.0, &path.key("callbacks").key(name))?;
            }
        }
    }
    Ok(())
}
