//! Named-schema registry backing `$ref` resolution.
//!
//! A specification document may carry a top-level `schemas` table of named,
//! reusable schemas. The registry holds those entries and hands out shared
//! handles when a `$ref` names one. It is a plain value threaded explicitly
//! through parsing; two documents parsed with two registries cannot observe
//! each other.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::SpecResult;
use crate::schema::types::SchemaNode;

/// Registry of named schemas, keyed by the `<name>` of `#/schemas/<name>`.
///
/// Entries live here once; every resolved reference to a name shares the
/// registry's [`Arc`] handle rather than copying the node. Entry order is
/// the document's table order.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Arc<SchemaNode>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry contents with the entries of a `schemas` table.
    ///
    /// The table is processed in document order against a cleared registry,
    /// inserting each parsed entry as it goes, so an entry body may `$ref`
    /// any entry that appeared earlier in the same table. Previous contents
    /// never survive: names registered before this call stop resolving.
    ///
    /// An entry whose body carries a non-null `$ref` is skipped entirely,
    /// not registered under its own name. Alias entries therefore resolve
    /// for nobody; references to them fail as not found.
    pub fn initialize(&mut self, table: &Map<String, Value>) -> SpecResult<()> {
        self.schemas.clear();
        for (name, body) in table {
            let is_alias = matches!(body.get("$ref"), Some(reference) if !reference.is_null());
            if is_alias {
                continue;
            }
            let node = SchemaNode::from_value(body, self)?;
            self.schemas.insert(name.clone(), node);
        }
        Ok(())
    }

    /// Look up a named schema, returning its shared handle.
    pub fn resolve(&self, name: &str) -> Option<Arc<SchemaNode>> {
        self.schemas.get(name).cloned()
    }

    /// Clone the current table. The clones are handle copies, not deep
    /// copies of the nodes.
    pub fn snapshot(&self) -> IndexMap<String, Arc<SchemaNode>> {
        self.schemas.clone()
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
