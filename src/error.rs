//! Error types for OpenTool document parsing and tool invocation.
//!
//! Parsing a specification document either succeeds wholesale or fails with a
//! [`SpecError`] naming the first problem encountered; there are no partial
//! results. Tool execution failures ([`CallError`]) and caller-side failures
//! ([`ClientError`]) carry the wire codes and messages of the JSON-RPC
//! surface.

use serde_json::{Map, Value, json};

/// Result alias for document-model operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Render an enum literal for error messages: strings bare, everything else
/// as compact JSON.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Errors raised while parsing or loading a tool specification document.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// A `$ref` string is not exactly `#/schemas/<name>`
    #[error("#ref format exception: {reference}")]
    RefFormat { reference: String },

    /// A well-formed `$ref` names a schema absent from the registry
    #[error("#ref not found: {reference}")]
    RefNotFound { reference: String },

    /// An enum literal is incompatible with the declared schema type
    #[error(
        "Enum value at index {index} (\"{}\") does not match schema type \"{kind}\".",
        literal_text(.value)
    )]
    EnumTypeMismatch {
        index: usize,
        value: Value,
        kind: String,
    },

    /// A required field is absent from the document
    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// A field is present but carries the wrong JSON type
    #[error("Field '{field}' has invalid type, expected {expected}")]
    InvalidField { field: String, expected: String },

    /// JSON text could not be parsed at all
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A specification file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience methods for creating common errors
impl SpecError {
    /// Create a ref format error
    pub fn ref_format(reference: impl Into<String>) -> Self {
        Self::RefFormat {
            reference: reference.into(),
        }
    }

    /// Create a ref not found error
    pub fn ref_not_found(reference: impl Into<String>) -> Self {
        Self::RefNotFound {
            reference: reference.into(),
        }
    }

    /// Create an enum type mismatch error
    pub fn enum_type_mismatch(index: usize, value: Value, kind: impl Into<String>) -> Self {
        Self::EnumTypeMismatch {
            index,
            value,
            kind: kind.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// Errors a tool reports while executing a function call.
///
/// Each variant maps to the wire code the `/call` endpoint returns in its
/// error object.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The named function is not exposed by this tool (405)
    #[error("Function Not Supported: {name}")]
    FunctionNotSupported { name: String },

    /// The arguments do not satisfy the function's parameter schemas (400)
    #[error("Invalid Arguments: {arguments}")]
    InvalidArguments { arguments: String },

    /// The tool itself failed while running the function (500)
    #[error("{message}")]
    ToolBroken { message: String },

    /// The tool does not publish a specification document (404)
    #[error("Json Parser NOT implement")]
    SpecUnavailable,
}

impl CallError {
    /// Create a function not supported error
    pub fn function_not_supported(name: impl Into<String>) -> Self {
        Self::FunctionNotSupported { name: name.into() }
    }

    /// Create an invalid arguments error from the offending argument map
    pub fn invalid_arguments(arguments: &Map<String, Value>) -> Self {
        Self::InvalidArguments {
            arguments: Value::Object(arguments.clone()).to_string(),
        }
    }

    /// Create a tool break error
    pub fn tool_broken(message: impl Into<String>) -> Self {
        Self::ToolBroken {
            message: message.into(),
        }
    }

    /// Wire code for this failure
    pub fn code(&self) -> i64 {
        match self {
            Self::FunctionNotSupported { .. } => 405,
            Self::InvalidArguments { .. } => 400,
            Self::ToolBroken { .. } => 500,
            Self::SpecUnavailable => 404,
        }
    }

    /// The `{code, message}` payload the wire surface carries
    pub fn to_value(&self) -> Value {
        json!({
            "code": self.code(),
            "message": self.to_string(),
        })
    }
}

/// Errors observed by a caller talking to a remote tool server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected the API key (401)
    #[error("Please check API Key is VALID or NOT")]
    Unauthorized,

    /// The server could not be reached (404)
    #[error("Please check OpenTool Server is RUNNING or NOT")]
    NoAccess,

    /// The call reached the server but failed; carries the message only
    #[error("{message}")]
    CallFailed { message: String },
}

impl ClientError {
    /// Create a call failed error
    pub fn call_failed(message: impl Into<String>) -> Self {
        Self::CallFailed {
            message: message.into(),
        }
    }

    /// Wire code for this failure, when the taxonomy assigns one
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Unauthorized => Some(401),
            Self::NoAccess => Some(404),
            Self::CallFailed { .. } => None,
        }
    }

    /// The payload shape of this failure: `{code, message}` when a code
    /// exists, `{message}` otherwise
    pub fn to_value(&self) -> Value {
        match self.code() {
            Some(code) => json!({ "code": code, "message": self.to_string() }),
            None => json!({ "message": self.to_string() }),
        }
    }
}
