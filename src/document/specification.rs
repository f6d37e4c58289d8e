//! The specification document aggregate root.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::document::function::FunctionDescriptor;
use crate::document::info::ToolInfo;
use crate::document::required_string;
use crate::document::server::ServerDescriptor;
use crate::error::{SpecError, SpecResult};
use crate::schema::{SchemaNode, SchemaRegistry};

/// A complete OpenTool specification document.
///
/// Owns the document's metadata, optional server descriptor, and function
/// descriptors. When the document carries a `schemas` table, the parsed
/// table is kept here as well; its nodes are the same handles the
/// registry hands out for `$ref` resolution.
///
/// Parsing is ordered: the `schemas` table (when present) seeds the registry
/// before any function parses, so parameter and return schemas may reference
/// the table by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpecification {
    spec_version: String,
    info: ToolInfo,
    server: Option<ServerDescriptor>,
    functions: Vec<FunctionDescriptor>,
    schemas: Option<IndexMap<String, Arc<SchemaNode>>>,
}

impl ToolSpecification {
    /// Create a document with the mandatory version string and metadata.
    pub fn new(spec_version: impl Into<String>, info: ToolInfo) -> Self {
        Self {
            spec_version: spec_version.into(),
            info,
            server: None,
            functions: Vec::new(),
            schemas: None,
        }
    }

    pub fn with_server(mut self, server: ServerDescriptor) -> Self {
        self.server = Some(server);
        self
    }

    /// Append a function descriptor, preserving declaration order.
    pub fn with_function(mut self, function: FunctionDescriptor) -> Self {
        self.functions.push(function);
        self
    }

    /// Attach a named-schema table, typically a registry snapshot.
    pub fn with_schemas(mut self, schemas: IndexMap<String, Arc<SchemaNode>>) -> Self {
        self.schemas = Some(schemas);
        self
    }

    /// The declared specification version (wire field `opentool`).
    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }

    pub fn info(&self) -> &ToolInfo {
        &self.info
    }

    pub fn server(&self) -> Option<&ServerDescriptor> {
        self.server.as_ref()
    }

    pub fn functions(&self) -> &[FunctionDescriptor] {
        &self.functions
    }

    pub fn schemas(&self) -> Option<&IndexMap<String, Arc<SchemaNode>>> {
        self.schemas.as_ref()
    }

    /// Look up a function descriptor by name.
    pub fn function(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.functions.iter().find(|function| function.name() == name)
    }

    /// Parse a document against a caller-owned registry.
    ///
    /// If the document carries a `schemas` table, the registry is
    /// reinitialized from it (wholesale, dropping whatever it held) before
    /// functions parse, and the resulting table is stored on the document.
    /// If it carries none, the registry is left untouched, so a caller may
    /// deliberately resolve this document's `$ref`s against schemas from an
    /// earlier load.
    ///
    /// An absent or null `functions` array yields an empty function list.
    pub fn parse_with_registry(
        value: &Value,
        registry: &mut SchemaRegistry,
    ) -> SpecResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SpecError::invalid_field("document", "object"))?;

        let spec_version = required_string(object, "opentool", "document")?;

        let schemas = match object.get("schemas") {
            Some(Value::Object(table)) => {
                registry.initialize(table)?;
                Some(registry.snapshot())
            }
            Some(Value::Null) | None => None,
            Some(_) => return Err(SpecError::invalid_field("schemas", "object")),
        };

        let info = object
            .get("info")
            .ok_or_else(|| SpecError::missing_field("info", "document"))?;
        let info = ToolInfo::from_value(info)?;

        let server = match object.get("server") {
            Some(Value::Null) | None => None,
            Some(value) => Some(ServerDescriptor::from_value(value)?),
        };

        let functions = match object.get("functions") {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| FunctionDescriptor::from_value(entry, registry))
                .collect::<SpecResult<Vec<_>>>()?,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => return Err(SpecError::invalid_field("functions", "array")),
        };

        Ok(Self {
            spec_version,
            info,
            server,
            functions,
            schemas,
        })
    }

    /// Parse a document in isolation, with a registry of its own.
    pub fn parse(value: &Value) -> SpecResult<Self> {
        let mut registry = SchemaRegistry::new();
        Self::parse_with_registry(value, &mut registry)
    }

    /// Parse a document from JSON text, in isolation.
    pub fn from_json(text: &str) -> SpecResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::parse(&value)
    }

    /// Serialize the document.
    ///
    /// `opentool`, `info`, and `functions` are always emitted; `server` and
    /// `schemas` only when present.
    pub fn to_value(&self) -> Value {
        let mut result = Map::new();
        result.insert(
            "opentool".to_string(),
            Value::String(self.spec_version.clone()),
        );
        result.insert("info".to_string(), self.info.to_value());
        result.insert(
            "functions".to_string(),
            Value::Array(
                self.functions
                    .iter()
                    .map(FunctionDescriptor::to_value)
                    .collect(),
            ),
        );
        if let Some(server) = &self.server {
            result.insert("server".to_string(), server.to_value());
        }
        if let Some(schemas) = &self.schemas {
            let mut table = Map::new();
            for (name, schema) in schemas {
                table.insert(name.clone(), schema.to_value());
            }
            result.insert("schemas".to_string(), Value::Object(table));
        }
        Value::Object(result)
    }

    /// Serialize to compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }
}
