//! Loading specification documents from text or files.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::document::specification::ToolSpecification;
use crate::error::SpecResult;
use crate::schema::SchemaRegistry;

/// Loads specification documents, carrying one registry across loads.
///
/// Each load parses against the loader's own [`SchemaRegistry`]. A document
/// with a `schemas` table replaces the registry contents; a document without
/// one resolves its `$ref`s against whatever the previous load registered.
/// Use one loader per document stream that should share schemas, and
/// separate loaders for full isolation.
#[derive(Debug, Clone, Default)]
pub struct SpecLoader {
    registry: SchemaRegistry,
}

impl SpecLoader {
    /// Create a loader with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry state left by the most recent load.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Parse a specification document from JSON text.
    pub fn load(&mut self, text: &str) -> SpecResult<ToolSpecification> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        debug!("Parsing tool specification document ({} bytes)", text.len());
        let specification = ToolSpecification::parse_with_registry(&value, &mut self.registry)?;
        info!(
            "Loaded tool specification '{}' v{} with {} function(s)",
            specification.info().title(),
            specification.info().version(),
            specification.functions().len()
        );
        Ok(specification)
    }

    /// Read a file and parse its contents as a specification document.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> SpecResult<ToolSpecification> {
        let path = path.as_ref();
        debug!("Reading tool specification from {}", path.display());
        let content = fs::read_to_string(path)?;
        self.load(&content)
    }
}
