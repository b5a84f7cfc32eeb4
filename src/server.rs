use crate::enso::EnsoClient;
use crate::tools::ToolRegistry;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};

const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Option<Value>,
    id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcResponse {
    jsonrpc: String,
    result: Option<Value>,
    error: Option<JsonRpcError>,
    id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcError {
    code: i32,
    message: String,
    data: Option<Value>,
}

impl JsonRpcResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: Some(result),
            error: None,
            id,
        }
    }

    fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self::error_with_data(id, code, message, None)
    }

    fn error_with_data(
        id: Option<Value>,
        code: i32,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data,
            }),
            id,
        }
    }
}

pub async fn run(client: EnsoClient, tools: ToolRegistry) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    info!(
        tools = tools.len(),
        "MCP Server Ready. Waiting for JSON-RPC requests on stdin..."
    );

    while let Some(Ok(line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        debug!("Received request: {}", line);

        if let Some(response) = handle_line(&line, &client, &tools).await {
            let response_str = serde_json::to_string(&response)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", response_str)?;
            stdout.flush()?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}

async fn handle_line(
    line: &str,
    client: &EnsoClient,
    tools: &ToolRegistry,
) -> Option<JsonRpcResponse> {
    let req: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to parse JSON-RPC request: {}", e);
            return Some(JsonRpcResponse::error(
                None,
                -32700,
                format!("Parse error: {}", e),
            ));
        }
    };

    // Notifications carry no id and get no reply.
    if req.id.is_none() {
        debug!(method = %req.method, "Ignoring notification");
        return None;
    }

    Some(handle_request(&req, client, tools).await)
}

async fn handle_request(
    req: &JsonRpcRequest,
    client: &EnsoClient,
    tools: &ToolRegistry,
) -> JsonRpcResponse {
    let id = req.id.clone();
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "tools/list" => {
            let tool_list: Vec<Value> = tools
                .iter()
                .map(|t| {
                    json!({
                        "name": t.name(),
                        "description": t.description(),
                        "inputSchema": t.schema()
                    })
                })
                .collect();

            JsonRpcResponse::success(id, json!({ "tools": tool_list }))
        }
        "tools/call" => {
            let Some(params) = &req.params else {
                return JsonRpcResponse::error(id, -32602, "Missing params");
            };
            let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
                return JsonRpcResponse::error(id, -32602, "Missing 'name' parameter");
            };
            let Some(tool) = tools.get(tool_name) else {
                return JsonRpcResponse::error(
                    id,
                    -32601,
                    format!("Tool not found: {}", tool_name),
                );
            };
            let args = params.get("arguments").cloned().unwrap_or(json!({}));

            match tool.call(client, args).await {
                // MCP 'content' for hosts, plus the raw payload in 'data' for agents.
                Ok(result) => JsonRpcResponse::success(
                    id,
                    json!({
                        "content": [{
                            "type": "text",
                            "text": serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string())
                        }],
                        "data": result
                    }),
                ),
                Err(e) => {
                    warn!(tool = tool_name, kind = e.kind(), "Tool execution failed: {}", e);
                    JsonRpcResponse::error_with_data(
                        id,
                        -32603,
                        format!("Tool execution failed: {}", e),
                        Some(json!({ "kind": e.kind(), "status": e.status() })),
                    )
                }
            }
        }
        _ => JsonRpcResponse::error(id, -32601, "Method not found"),
    }
}
