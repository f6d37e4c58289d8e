//! Document metadata: title, version, and description.

use serde_json::{Map, Value};

use crate::document::{optional_string, required_string};
use crate::error::{SpecError, SpecResult};

/// Title and version metadata of a specification document.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInfo {
    title: String,
    version: String,
    description: Option<String>,
}

impl ToolInfo {
    /// Create info with the two mandatory fields.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Parse from the document's `info` object.
    pub fn from_value(value: &Value) -> SpecResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SpecError::invalid_field("info", "object"))?;
        Ok(Self {
            title: required_string(object, "title", "info")?,
            version: required_string(object, "version", "info")?,
            description: optional_string(object, "description")?,
        })
    }

    /// Serialize, omitting an absent description.
    pub fn to_value(&self) -> Value {
        let mut result = Map::new();
        result.insert("title".to_string(), Value::String(self.title.clone()));
        result.insert("version".to_string(), Value::String(self.version.clone()));
        if let Some(description) = &self.description {
            result.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }
        Value::Object(result)
    }
}
