//! Serving-location descriptor.

use serde_json::{Map, Value};

use crate::document::{optional_string, required_string};
use crate::error::{SpecError, SpecResult};

/// Where a tool's functions are served from.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerDescriptor {
    url: String,
    description: Option<String>,
}

impl ServerDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Parse from the document's `server` object.
    pub fn from_value(value: &Value) -> SpecResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SpecError::invalid_field("server", "object"))?;
        Ok(Self {
            url: required_string(object, "url", "server")?,
            description: optional_string(object, "description")?,
        })
    }

    /// Serialize, omitting an absent description.
    pub fn to_value(&self) -> Value {
        let mut result = Map::new();
        result.insert("url".to_string(), Value::String(self.url.clone()));
        if let Some(description) = &self.description {
            result.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }
        Value::Object(result)
    }
}
