//! Stdio tool server.
//!
//! Reads one JSON-RPC message per line from stdin and writes responses to
//! stdout. The metrics engine underneath is pure and synchronous; the only
//! async here is the stdio plumbing.

pub mod protocol;
pub mod tools;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use protocol::{Request, Response, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION};
pub use tools::ToolContext;

/// Serve the tool protocol over stdin/stdout until stdin closes.
pub async fn serve(ctx: ToolContext) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    tracing::info!("serving tools on stdio");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(response) = handle_line(&ctx, &line) {
            let mut out = serde_json::to_vec(&response)?;
            out.push(b'\n');
            stdout.write_all(&out).await?;
            stdout.flush().await?;
        }
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

/// Handle one raw message. Returns `None` for notifications, which get no
/// response.
pub fn handle_line(ctx: &ToolContext, line: &str) -> Option<Response> {
    let request: Request = match serde_json::from_str(line) {
        Ok(req) => req,
        Err(e) => {
            return Some(Response::error(
                Value::Null,
                PARSE_ERROR,
                format!("parse error: {e}"),
            ));
        }
    };

    let id = request.id?;
    Some(handle_request(ctx, id, &request.method, &request.params))
}

fn handle_request(ctx: &ToolContext, id: Value, method: &str, params: &Value) -> Response {
    match method {
        "initialize" => Response::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
            }),
        ),
        "ping" => Response::success(id, json!({})),
        "tools/list" => Response::success(id, json!({ "tools": tools::list_tools() })),
        "tools/call" => {
            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return Response::error(
                    id,
                    protocol::INVALID_PARAMS,
                    "tools/call requires a tool name",
                );
            };
            let default_args = json!({});
            let args = params.get("arguments").unwrap_or(&default_args);

            let payload = tools::call_tool(ctx, name, args);
            Response::success(id, protocol::tool_result(&payload))
        }
        other => Response::error(id, METHOD_NOT_FOUND, format!("unknown method: {other}")),
    }
}
