//! JSON-RPC envelope types and wire constants.
//!
//! These are the shapes a transport adapter moves between a caller and a
//! [`ToolHandler`](crate::handler::ToolHandler): the version payload, the
//! call request/response envelopes, and the daemon registration handshake.
//! The crate ships the shapes only; listening and routing belong to the
//! embedding application.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CallError;

/// Protocol version carried in every envelope.
pub const JSONRPC_VERSION: &str = "2.0.0";

/// Default port a tool server listens on.
pub const DEFAULT_PORT: u16 = 9627;

/// Default path prefix a tool server mounts under.
pub const DEFAULT_PREFIX: &str = "/opentool";

/// Default port of the daemon that tracks running tool servers.
pub const DAEMON_DEFAULT_PORT: u16 = 19627;

/// Default path prefix of the daemon.
pub const DAEMON_DEFAULT_PREFIX: &str = "/opentool-daemon";

fn default_jsonrpc() -> String {
    JSONRPC_VERSION.to_string()
}

/// Payload of `GET /version`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

impl VersionResponse {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Request envelope of `POST /call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
    pub id: String,
}

impl JsonRpcRequest {
    pub fn new(method: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_jsonrpc(),
            method: method.into(),
            params: None,
            id: id.into(),
        }
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(params);
        self
    }
}

/// Error object inside a response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&CallError> for JsonRpcError {
    fn from(error: &CallError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

/// Response envelope of `POST /call`.
///
/// A failed call still carries a `result` (empty) next to its `error`, so
/// the shape is uniform for callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    pub result: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: String,
}

impl JsonRpcResponse {
    /// A successful response echoing the request id.
    pub fn success(result: Map<String, Value>, id: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_jsonrpc(),
            result,
            error: None,
            id: id.into(),
        }
    }

    /// A failed response with an empty result map.
    pub fn failure(error: JsonRpcError, id: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_jsonrpc(),
            result: Map::new(),
            error: Some(error),
            id: id.into(),
        }
    }
}

/// Registration payload a tool server sends the daemon on startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInfo {
    /// Path of the specification file the server is serving
    pub file: String,
    pub host: String,
    pub port: u16,
    pub prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<String>>,
    pub pid: u32,
}

/// Daemon's answer to a registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResult {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
