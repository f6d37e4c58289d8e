//! Framework-agnostic handler mapping wire envelopes onto a [`Tool`].
//!
//! The handler owns the endpoint semantics of a tool server (version
//! reporting, call dispatch, and specification publishing) without being
//! tied to any transport. An HTTP adapter feeds it decoded request bodies
//! and writes back the envelopes it returns.

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::CallError;
use crate::rpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, VersionResponse};
use crate::tool::Tool;

/// Endpoint logic of a tool server, wrapping one [`Tool`].
pub struct ToolHandler<T: Tool> {
    tool: T,
    version: String,
}

impl<T: Tool> ToolHandler<T> {
    /// Wrap a tool, with the version string `GET /version` reports.
    pub fn new(tool: T, version: impl Into<String>) -> Self {
        Self {
            tool,
            version: version.into(),
        }
    }

    /// Access to the wrapped tool.
    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// `GET /version`.
    pub fn handle_version(&self) -> VersionResponse {
        VersionResponse::new(self.version.clone())
    }

    /// `POST /call`: decode the envelope, dispatch to the tool, wrap the
    /// outcome.
    ///
    /// A payload that does not decode as a call envelope (or carries an
    /// empty method) produces a 400 response with an empty id, since no id
    /// can be trusted from a malformed body. A tool failure produces its
    /// [`CallError`] code and message under the original request id.
    pub async fn handle_call(&self, payload: Value) -> JsonRpcResponse {
        let request = match serde_json::from_value::<JsonRpcRequest>(payload) {
            Ok(request) if !request.method.is_empty() => request,
            _ => {
                warn!("Rejecting malformed call envelope");
                return JsonRpcResponse::failure(
                    JsonRpcError::new(400, "Invalid request body"),
                    "",
                );
            }
        };

        info!(
            "Dispatching function '{}' (call: '{}')",
            request.method, request.id
        );

        match self.tool.call(&request.method, request.params.as_ref()).await {
            Ok(result) => {
                debug!("Function '{}' completed (call: '{}')", request.method, request.id);
                JsonRpcResponse::success(result, request.id)
            }
            Err(error) => {
                warn!(
                    "Function '{}' failed: {} (call: '{}')",
                    request.method, error, request.id
                );
                JsonRpcResponse::failure(JsonRpcError::from(&error), request.id)
            }
        }
    }

    /// `GET /load`: the tool's serialized specification document, or the
    /// fixed `{code: 404, message: "Json Parser NOT implement"}` payload
    /// when the tool publishes none.
    pub async fn handle_load(&self) -> Value {
        match self.tool.load().await {
            Some(specification) => {
                debug!(
                    "Publishing specification '{}' v{}",
                    specification.info().title(),
                    specification.info().version()
                );
                specification.to_value()
            }
            None => CallError::SpecUnavailable.to_value(),
        }
    }
}
