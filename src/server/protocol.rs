//! JSON-RPC 2.0 message types for the stdio tool protocol.
//!
//! The server speaks a minimal MCP-style dialect: `initialize`,
//! `tools/list` and `tools/call`, one JSON message per line on
//! stdin/stdout. Logging goes to stderr so stdout stays a clean protocol
//! channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol revision reported to hosts during `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error code: parse error.
pub const PARSE_ERROR: i64 = -32700;
/// JSON-RPC error code: method not found.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// JSON-RPC error code: invalid params.
pub const INVALID_PARAMS: i64 = -32602;

/// An incoming JSON-RPC request or notification.
#[derive(Debug, Deserialize)]
pub struct Request {
    pub jsonrpc: Option<String>,
    /// Absent for notifications, which get no response.
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// An outgoing JSON-RPC response.
#[derive(Debug, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// A JSON-RPC protocol-level error object.
#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl Response {
    /// Successful response for a request id.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Protocol-level error response. Tool-level faults never use this
    /// path; they come back as structured tool results instead.
    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Description of one tool for `tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Wrap a tool payload in the `tools/call` result shape: one text content
/// block holding the payload JSON.
pub fn tool_result(payload: &Value) -> Value {
    serde_json::json!({
        "content": [
            { "type": "text", "text": payload.to_string() }
        ]
    })
}
