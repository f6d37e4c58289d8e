//! Schema model for tool specification documents.
//!
//! This module provides the recursive schema tree and the named-schema
//! registry that backs `$ref` resolution.
//!
//! # Key Types
//!
//! - [`SchemaNode`] - One value shape: type, properties, items, enum, required
//! - [`SchemaRegistry`] - Named schemas a document's `$ref`s resolve against
//! - [`SchemaType`] - Constants for the well-known type names
//!
//! # Examples
//!
//! ```rust
//! use opentool::schema::{SchemaNode, SchemaRegistry};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), opentool::SpecError> {
//! let registry = SchemaRegistry::new();
//! let node = SchemaNode::from_value(
//!     &json!({"type": "array", "items": {"type": "integer"}}),
//!     &registry,
//! )?;
//! assert_eq!(node.items().map(|items| items.kind()), Some("integer"));
//! # Ok(())
//! # }
//! ```

pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export the main types for convenience
pub use registry::SchemaRegistry;
pub use types::{SchemaNode, SchemaType};
