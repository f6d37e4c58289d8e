//! The traits a tool author and a tool caller implement.
//!
//! [`Tool`] is the provider side: given a function name and arguments,
//! produce a result map or a [`CallError`]. [`ToolClient`] is the caller
//! side of the same three-endpoint surface. Both are transport-agnostic;
//! adapters for HTTP or anything else live with the embedding application.

use std::future::Future;

use serde_json::{Map, Value};

use crate::document::ToolSpecification;
use crate::error::{CallError, ClientError};
use crate::llm::{FunctionCall, ToolReturn};
use crate::rpc::VersionResponse;

/// A tool exposing callable functions described by a specification document.
///
/// Implementations decide how to validate arguments and what failures map to
/// which [`CallError`] variant; the handler turns those into wire envelopes.
///
/// # Examples
///
/// ```rust
/// use opentool::error::CallError;
/// use opentool::tool::Tool;
/// use serde_json::{Map, Value, json};
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     async fn call(
///         &self,
///         name: &str,
///         arguments: Option<&Map<String, Value>>,
///     ) -> Result<Map<String, Value>, CallError> {
///         match name {
///             "echo" => {
///                 let mut result = Map::new();
///                 result.insert(
///                     "echo".to_string(),
///                     arguments
///                         .and_then(|arguments| arguments.get("text"))
///                         .cloned()
///                         .unwrap_or(json!(null)),
///                 );
///                 Ok(result)
///             }
///             other => Err(CallError::function_not_supported(other)),
///         }
///     }
/// }
/// ```
pub trait Tool {
    /// Run the named function with the given arguments.
    fn call(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> impl Future<Output = Result<Map<String, Value>, CallError>> + Send;

    /// The tool's own specification document, if it publishes one.
    fn load(&self) -> impl Future<Output = Option<ToolSpecification>> + Send {
        std::future::ready(None)
    }
}

/// The caller side of a tool server.
pub trait ToolClient {
    /// Fetch the server's version payload.
    fn version(&self) -> impl Future<Output = Result<VersionResponse, ClientError>> + Send;

    /// Execute a function call, tying the result to the call id.
    fn call(
        &self,
        function_call: FunctionCall,
    ) -> impl Future<Output = Result<ToolReturn, ClientError>> + Send;

    /// Fetch the server's specification document, if it publishes one.
    fn load(&self) -> impl Future<Output = Option<ToolSpecification>> + Send {
        std::future::ready(None)
    }
}
