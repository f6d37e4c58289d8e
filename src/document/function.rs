//! Function descriptors: the callable surface of a tool.
//!
//! A [`FunctionDescriptor`] names one callable function, its ordered
//! [`ParameterDescriptor`]s, and optionally a [`ReturnDescriptor`]. Parameter
//! and return shapes are [`SchemaNode`]s, so `$ref`s inside them resolve
//! against the registry the document was parsed with.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::document::{optional_string, required_bool, required_string};
use crate::error::{SpecError, SpecResult};
use crate::schema::{SchemaNode, SchemaRegistry};

/// One named input of a function.
///
/// `required` is mandatory on the wire: a parameter either must be supplied
/// or may be omitted, and the document has to say which.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    name: String,
    description: Option<String>,
    schema: Arc<SchemaNode>,
    required: bool,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, schema: SchemaNode, required: bool) -> Self {
        Self {
            name: name.into(),
            description: None,
            schema: Arc::new(schema),
            required,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn schema(&self) -> &Arc<SchemaNode> {
        &self.schema
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// Parse from one entry of a function's `parameters` array.
    pub fn from_value(value: &Value, registry: &SchemaRegistry) -> SpecResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SpecError::invalid_field("parameter", "object"))?;
        let schema = object
            .get("schema")
            .ok_or_else(|| SpecError::missing_field("schema", "parameter"))?;
        Ok(Self {
            name: required_string(object, "name", "parameter")?,
            description: optional_string(object, "description")?,
            schema: SchemaNode::from_value(schema, registry)?,
            required: required_bool(object, "required", "parameter")?,
        })
    }

    pub fn to_value(&self) -> Value {
        let mut result = Map::new();
        result.insert("name".to_string(), Value::String(self.name.clone()));
        result.insert("schema".to_string(), self.schema.to_value());
        result.insert("required".to_string(), Value::Bool(self.required));
        if let Some(description) = &self.description {
            result.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }
        Value::Object(result)
    }
}

/// The shape of a function's result. Wire key on the function is `return`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnDescriptor {
    name: String,
    description: Option<String>,
    schema: Arc<SchemaNode>,
}

impl ReturnDescriptor {
    pub fn new(name: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            description: None,
            schema: Arc::new(schema),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn schema(&self) -> &Arc<SchemaNode> {
        &self.schema
    }

    /// Parse from a function's `return` object.
    pub fn from_value(value: &Value, registry: &SchemaRegistry) -> SpecResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SpecError::invalid_field("return", "object"))?;
        let schema = object
            .get("schema")
            .ok_or_else(|| SpecError::missing_field("schema", "return"))?;
        Ok(Self {
            name: required_string(object, "name", "return")?,
            description: optional_string(object, "description")?,
            schema: SchemaNode::from_value(schema, registry)?,
        })
    }

    pub fn to_value(&self) -> Value {
        let mut result = Map::new();
        result.insert("name".to_string(), Value::String(self.name.clone()));
        result.insert("schema".to_string(), self.schema.to_value());
        if let Some(description) = &self.description {
            result.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }
        Value::Object(result)
    }
}

/// One callable function of a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDescriptor {
    name: String,
    description: String,
    parameters: Vec<ParameterDescriptor>,
    returns: Option<ReturnDescriptor>,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            returns: None,
        }
    }

    /// Append a parameter, preserving declaration order.
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_returns(mut self, returns: ReturnDescriptor) -> Self {
        self.returns = Some(returns);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn returns(&self) -> Option<&ReturnDescriptor> {
        self.returns.as_ref()
    }

    /// Parse from one entry of the document's `functions` array.
    ///
    /// An absent or null `parameters` array means a zero-parameter function,
    /// never an error.
    pub fn from_value(value: &Value, registry: &SchemaRegistry) -> SpecResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SpecError::invalid_field("function", "object"))?;

        let parameters = match object.get("parameters") {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| ParameterDescriptor::from_value(entry, registry))
                .collect::<SpecResult<Vec<_>>>()?,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => return Err(SpecError::invalid_field("parameters", "array")),
        };

        let returns = match object.get("return") {
            Some(Value::Null) | None => None,
            Some(value) => Some(ReturnDescriptor::from_value(value, registry)?),
        };

        Ok(Self {
            name: required_string(object, "name", "function")?,
            description: required_string(object, "description", "function")?,
            parameters,
            returns,
        })
    }

    pub fn to_value(&self) -> Value {
        let mut result = Map::new();
        result.insert("name".to_string(), Value::String(self.name.clone()));
        result.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        result.insert(
            "parameters".to_string(),
            Value::Array(
                self.parameters
                    .iter()
                    .map(ParameterDescriptor::to_value)
                    .collect(),
            ),
        );
        if let Some(returns) = &self.returns {
            result.insert("return".to_string(), returns.to_value());
        }
        Value::Object(result)
    }
}
