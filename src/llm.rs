//! Value types for the LLM side of a tool conversation.
//!
//! An agent emits a [`FunctionCall`] naming a function from a tool's
//! specification; the matching [`ToolReturn`] carries the result back under
//! the same call id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A function invocation requested by an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub id: String,
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl FunctionCall {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: Map<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }
}

/// The result of a completed function call, tied to its call id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolReturn {
    pub id: String,
    pub result: Map<String, Value>,
}

impl ToolReturn {
    pub fn new(id: impl Into<String>, result: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            result,
        }
    }
}

/// Mint a fresh call id (a v4 UUID).
pub fn unique_id() -> String {
    Uuid::new_v4().to_string()
}

/// Shorter id for logs and display: the first 10 characters of a v4 UUID.
pub fn short_unique_id() -> String {
    let id = Uuid::new_v4().to_string();
    id[..10].to_string()
}
