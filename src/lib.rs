//! OpenTool specification library for Rust.
//!
//! Parse, validate, and serialize the specification documents that describe
//! LLM-callable tool functions, and serve them through a transport-agnostic
//! handler.
//!
//! # Core Components
//!
//! - [`ToolSpecification`] - A complete specification document
//! - [`SchemaNode`] / [`SchemaRegistry`] - The recursive schema model and
//!   the named-schema table backing `$ref` resolution
//! - [`Tool`] - Trait a tool author implements
//! - [`ToolHandler`] - Maps wire envelopes onto a [`Tool`]
//!
//! # Quick Start
//!
//! ```rust
//! use opentool::ToolSpecification;
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
//!
//! let wire = specification.to_value();
//! assert_eq!(specification, ToolSpecification::parse(&wire)?);
//! # Ok(())
//! # }
//! ```
//!
//! Documents are parsed against an explicit [`SchemaRegistry`]:
//! [`ToolSpecification::parse`] gives each document a registry of its own,
//! while [`SpecLoader`] keeps one registry alive across loads for documents
//! that share schemas.

pub mod document;
pub mod error;
pub mod handler;
pub mod llm;
pub mod rpc;
pub mod schema;
pub mod tool;

// Re-export commonly used types for convenience
pub use document::{
    FunctionDescriptor, ParameterDescriptor, ReturnDescriptor, ServerDescriptor, SpecLoader,
    ToolInfo, ToolSpecification,
};
pub use error::{CallError, ClientError, SpecError, SpecResult};
pub use handler::ToolHandler;
pub use llm::{FunctionCall, ToolReturn, short_unique_id, unique_id};
pub use rpc::{
    DAEMON_DEFAULT_PORT, DAEMON_DEFAULT_PREFIX, DEFAULT_PORT, DEFAULT_PREFIX, JSONRPC_VERSION,
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, RegisterInfo, RegisterResult, VersionResponse,
};
pub use schema::{SchemaNode, SchemaRegistry, SchemaType};
pub use tool::{Tool, ToolClient};
