//! The tool specification document model.
//!
//! An OpenTool document describes the callable functions a tool exposes: its
//! metadata ([`ToolInfo`]), an optional serving location
//! ([`ServerDescriptor`]), the function descriptors themselves, and an
//! optional table of named, reusable schemas. [`ToolSpecification`] is the
//! aggregate root; [`SpecLoader`] is the text/file entry point.
//!
//! # Examples
//!
//! ```rust
//! use opentool::document::ToolSpecification;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), opentool::SpecError> {
//! let specification = ToolSpecification::parse(&json!({
//!     "opentool": "1.0.0",
//!     "info": {"title": "Chart Tool", "version": "0.1.0"},
//!     "functions": [{
//!         "name": "render",
//!         "description": "Render a chart",
//!         "parameters": [
//!             {"name": "title", "schema": {"type": "string"}, "required": true}
//!         ]
//!     }]
//! }))?;
//! assert_eq!(specification.functions().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod function;
pub mod info;
pub mod loader;
pub mod server;
pub mod specification;


// Re-export the main types for convenience
pub use function::{FunctionDescriptor, ParameterDescriptor, ReturnDescriptor};
pub use info::ToolInfo;
pub use loader::SpecLoader;
pub use server::ServerDescriptor;
pub use specification::ToolSpecification;

use serde_json::{Map, Value};

use crate::error::{SpecError, SpecResult};

/// Fetch a mandatory string field from a document object.
pub(crate) fn required_string(
    object: &Map<String, Value>,
    field: &str,
    context: &str,
) -> SpecResult<String> {
    match object.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(SpecError::invalid_field(field, "string")),
        None => Err(SpecError::missing_field(field, context)),
    }
}

/// Fetch an optional string field; explicit null counts as absent.
pub(crate) fn optional_string(
    object: &Map<String, Value>,
    field: &str,
) -> SpecResult<Option<String>> {
    match object.get(field) {
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(SpecError::invalid_field(field, "string")),
    }
}

/// Fetch a mandatory boolean field from a document object.
pub(crate) fn required_bool(
    object: &Map<String, Value>,
    field: &str,
    context: &str,
) -> SpecResult<bool> {
    match object.get(field) {
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(SpecError::invalid_field(field, "boolean")),
        None => Err(SpecError::missing_field(field, context)),
    }
}
