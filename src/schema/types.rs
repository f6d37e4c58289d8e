//! Core schema type definitions for tool specification documents.
//!
//! This module contains the recursive [`SchemaNode`] describing the shape of
//! a function parameter or return value, and the [`SchemaType`] constants for
//! the well-known type names.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{SpecError, SpecResult};
use crate::schema::registry::SchemaRegistry;

/// Well-known schema type names.
///
/// The `type` field of a schema is an open string; these constants cover the
/// names with defined enum-consistency rules. Unrecognized names parse fine
/// and skip enum checking.
pub struct SchemaType;

impl SchemaType {
    pub const BOOLEAN: &'static str = "boolean";
    pub const INTEGER: &'static str = "integer";
    pub const NUMBER: &'static str = "number";
    pub const STRING: &'static str = "string";
    pub const ARRAY: &'static str = "array";
    pub const OBJECT: &'static str = "object";
}

/// A node in the recursive schema tree of a tool specification.
///
/// Describes one value shape: its `type`, optional `description`, nested
/// `properties` (object shapes), element `items` (array shapes), allowed
/// `enum` literals, and `required` property names. Nodes are immutable once
/// built; child edges are shared [`Arc`] handles, so a node resolved from a
/// `$ref` is the same allocation as its registry entry.
///
/// A non-empty `enum` must be type-consistent with the declared `type`;
/// construction fails otherwise. No other cross-field shape constraint is
/// enforced (`properties` next to `type: "string"` is legal).
///
/// # Examples
///
/// ```rust
/// use opentool::schema::{SchemaNode, SchemaRegistry};
/// use serde_json::json;
///
/// # fn main() -> Result<(), opentool::SpecError> {
/// let registry = SchemaRegistry::new();
/// let node = SchemaNode::from_value(
///     &json!({"type": "string", "enum": ["celsius", "fahrenheit"]}),
///     &registry,
/// )?;
/// assert_eq!(node.kind(), "string");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    kind: String,
    description: Option<String>,
    properties: Option<IndexMap<String, Arc<SchemaNode>>>,
    items: Option<Arc<SchemaNode>>,
    enumeration: Option<Vec<Value>>,
    required: Option<Vec<String>>,
}

impl SchemaNode {
    /// Create a schema node with only a type name.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: None,
            properties: None,
            items: None,
            enumeration: None,
            required: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a named property schema, preserving insertion order.
    pub fn with_property(mut self, name: impl Into<String>, schema: SchemaNode) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), Arc::new(schema));
        self
    }

    /// Set the element schema for array values.
    pub fn with_items(mut self, items: SchemaNode) -> Self {
        self.items = Some(Arc::new(items));
        self
    }

    /// Set the allowed enum literals.
    ///
    /// Fails with [`SpecError::EnumTypeMismatch`] if any literal is
    /// inconsistent with the node's type.
    pub fn with_enumeration(mut self, values: Vec<Value>) -> SpecResult<Self> {
        self.enumeration = Some(values);
        self.validate_enum_consistency()?;
        Ok(self)
    }

    /// Set the required property names.
    pub fn with_required(mut self, required: Vec<String>) -> Self {
        self.required = Some(required);
        self
    }

    /// The declared type name.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn properties(&self) -> Option<&IndexMap<String, Arc<SchemaNode>>> {
        self.properties.as_ref()
    }

    pub fn items(&self) -> Option<&Arc<SchemaNode>> {
        self.items.as_ref()
    }

    pub fn enumeration(&self) -> Option<&[Value]> {
        self.enumeration.as_deref()
    }

    pub fn required(&self) -> Option<&[String]> {
        self.required.as_deref()
    }

    /// Parse a schema node from its JSON form.
    ///
    /// A node carrying `$ref` is resolved against `registry` and the shared
    /// handle is returned directly; everything else on such a node is
    /// ignored. References take exactly the form `#/schemas/<name>`:
    /// anything else fails with [`SpecError::RefFormat`], and a well-formed
    /// reference to an unregistered name fails with
    /// [`SpecError::RefNotFound`].
    ///
    /// Child schemas under `properties` and `items` are parsed recursively
    /// with the same registry, and property order is preserved. Enum
    /// consistency is validated on every constructed node and re-checked on
    /// resolved ones.
    pub fn from_value(value: &Value, registry: &SchemaRegistry) -> SpecResult<Arc<SchemaNode>> {
        let object = value
            .as_object()
            .ok_or_else(|| SpecError::invalid_field("schema", "object"))?;

        match object.get("$ref") {
            Some(Value::String(reference)) => {
                let node = Self::resolve_ref(reference, registry)?;
                node.validate_enum_consistency()?;
                return Ok(node);
            }
            Some(Value::Null) | None => {}
            Some(_) => return Err(SpecError::invalid_field("$ref", "string")),
        }

        let kind = match object.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(_) => return Err(SpecError::invalid_field("type", "string")),
            None => return Err(SpecError::missing_field("type", "schema")),
        };

        let description = match object.get("description") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Null) | None => None,
            Some(_) => return Err(SpecError::invalid_field("description", "string")),
        };

        let properties = match object.get("properties") {
            Some(Value::Object(map)) => {
                let mut parsed = IndexMap::with_capacity(map.len());
                for (name, child) in map {
                    parsed.insert(name.clone(), Self::from_value(child, registry)?);
                }
                Some(parsed)
            }
            Some(Value::Null) | None => None,
            Some(_) => return Err(SpecError::invalid_field("properties", "object")),
        };

        let items = match object.get("items") {
            Some(Value::Null) | None => None,
            Some(child) => Some(Self::from_value(child, registry)?),
        };

        let enumeration = match object.get("enum") {
            Some(Value::Array(values)) => Some(values.clone()),
            Some(Value::Null) | None => None,
            Some(_) => return Err(SpecError::invalid_field("enum", "array")),
        };

        let required = match object.get("required") {
            Some(Value::Array(names)) => {
                let mut parsed = Vec::with_capacity(names.len());
                for name in names {
                    match name {
                        Value::String(name) => parsed.push(name.clone()),
                        _ => {
                            return Err(SpecError::invalid_field("required", "array of strings"));
                        }
                    }
                }
                Some(parsed)
            }
            Some(Value::Null) | None => None,
            Some(_) => return Err(SpecError::invalid_field("required", "array of strings")),
        };

        let node = SchemaNode {
            kind,
            description,
            properties,
            items,
            enumeration,
            required,
        };
        node.validate_enum_consistency()?;
        Ok(Arc::new(node))
    }

    /// Serialize this node to its JSON form.
    ///
    /// `type` is always emitted; every other field is emitted only when
    /// present, never as a null placeholder. Resolved references serialize
    /// inline, so this never fails.
    pub fn to_value(&self) -> Value {
        let mut result = Map::new();
        result.insert("type".to_string(), Value::String(self.kind.clone()));

        if let Some(description) = &self.description {
            result.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }

        if let Some(properties) = &self.properties {
            let mut serialized = Map::new();
            for (name, child) in properties {
                serialized.insert(name.clone(), child.to_value());
            }
            result.insert("properties".to_string(), Value::Object(serialized));
        }

        if let Some(items) = &self.items {
            result.insert("items".to_string(), items.to_value());
        }

        if let Some(values) = &self.enumeration {
            result.insert("enum".to_string(), Value::Array(values.clone()));
        }

        if let Some(required) = &self.required {
            result.insert(
                "required".to_string(),
                Value::Array(
                    required
                        .iter()
                        .map(|name| Value::String(name.clone()))
                        .collect(),
                ),
            );
        }

        Value::Object(result)
    }

    fn resolve_ref(reference: &str, registry: &SchemaRegistry) -> SpecResult<Arc<SchemaNode>> {
        let parts: Vec<&str> = reference.split('/').collect();
        if parts.len() != 3 || parts[0] != "#" || parts[1] != "schemas" {
            return Err(SpecError::ref_format(reference));
        }
        registry
            .resolve(parts[2])
            .ok_or_else(|| SpecError::ref_not_found(reference))
    }

    /// Check every enum literal against the declared type, failing at the
    /// first mismatch with its index and value. Nothing to check when the
    /// enum is absent or empty; idempotent on valid nodes.
    fn validate_enum_consistency(&self) -> SpecResult<()> {
        let Some(values) = &self.enumeration else {
            return Ok(());
        };
        for (index, value) in values.iter().enumerate() {
            if !self.value_matches_kind(value) {
                return Err(SpecError::enum_type_mismatch(
                    index,
                    value.clone(),
                    &self.kind,
                ));
            }
        }
        Ok(())
    }

    fn value_matches_kind(&self, value: &Value) -> bool {
        match self.kind.as_str() {
            SchemaType::STRING => value.is_string() || value.is_null(),
            SchemaType::INTEGER => is_whole_number(value) || value.is_null(),
            SchemaType::NUMBER => value.is_number() || value.is_null(),
            SchemaType::BOOLEAN => value.is_boolean() || value.is_null(),
            "null" => value.is_null(),
            // Unrecognized types, including array and object, are not checked
            _ => true,
        }
    }
}

/// Whole numbers qualify as integers even when written as floats (2.0).
/// Booleans never do.
fn is_whole_number(value: &Value) -> bool {
    match value {
        Value::Number(number) => {
            number.is_i64()
                || number.is_u64()
                || number.as_f64().is_some_and(|float| float.fract() == 0.0)
        }
        _ => false,
    }
}
