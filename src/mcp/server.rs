/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads newline-delimited JSON-RPC requests
/// 2. Routes tool calls to the habit tools
/// 3. Writes JSON-RPC responses, one per line

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::domain::HabitError;
use crate::mcp::protocol::*;
use crate::tools::{self, ToolResponse};
use crate::{AppService, HabitTrackerServer, ServerError};

/// MCP server that handles communication with a client
pub struct McpServer {
    /// The underlying habit tracker server
    habit_tracker: HabitTrackerServer,
    /// Whether the client has completed the handshake
    initialized: bool,
}

impl McpServer {
    pub fn new(habit_tracker: HabitTrackerServer) -> Self {
        Self {
            habit_tracker,
            initialized: false,
        }
    }

    /// Serve requests until the reader reaches end of input
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (input closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        writer.write_all(response_str.as_bytes()).await?;
                        writer.write_all(b"\n").await?;
                        writer.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read request: {}", e);
                    return Err(e.into());
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                warn!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        let id = match request.id.clone() {
            Some(id) => id,
            None => {
                self.handle_notification(&request.method);
                return None;
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported JSON-RPC version '{}'", request.jsonrpc),
                None,
            ));
        }

        Some(self.handle_request(id, request))
    }

    fn handle_notification(&mut self, method: &str) {
        match method {
            "notifications/initialized" | "initialized" => {
                self.initialized = true;
                info!("MCP client finished initialization");
            }
            other => debug!("Ignoring notification '{}'", other),
        }
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, id: Value, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params),
            _ => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Habit Tracker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        JsonRpcResponse::success_from(id, &result)
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let habit_id_schema = json!({
            "type": "object",
            "properties": {
                "habit_id": {"type": "integer", "description": "ID of the habit"}
            },
            "required": ["habit_id"]
        });

        let tools = vec![
            ToolDefinition {
                name: "habit_create".to_string(),
                description: "Create a new habit to track".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": {"type": "string", "description": "Name of the habit (unique, case-insensitive)"}
                    },
                    "required": ["name"]
                }),
            },
            ToolDefinition {
                name: "habit_list".to_string(),
                description: "List all habits with their current streaks".to_string(),
                input_schema: json!({"type": "object", "properties": {}, "required": []}),
            },
            ToolDefinition {
                name: "habit_get".to_string(),
                description: "Show one habit with its marks and current streak".to_string(),
                input_schema: habit_id_schema.clone(),
            },
            ToolDefinition {
                name: "habit_rename".to_string(),
                description: "Rename an existing habit".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "habit_id": {"type": "integer", "description": "ID of the habit"},
                        "name": {"type": "string", "description": "New name"}
                    },
                    "required": ["habit_id", "name"]
                }),
            },
            ToolDefinition {
                name: "habit_delete".to_string(),
                description: "Delete a habit permanently".to_string(),
                input_schema: habit_id_schema.clone(),
            },
            ToolDefinition {
                name: "habit_mark".to_string(),
                description: "Mark a habit as done for today".to_string(),
                input_schema: habit_id_schema.clone(),
            },
            ToolDefinition {
                name: "habit_stats".to_string(),
                description: "Streaks, success rate and recent marks for a habit".to_string(),
                input_schema: habit_id_schema,
            },
        ];

        JsonRpcResponse::success_from(id, &json!({"tools": tools}))
    }

    /// Handle tools/call request
    fn handle_tools_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        if !self.initialized {
            debug!("Tool call '{}' before client sent initialized", tool_params.name);
        }

        let args = tool_params.arguments;
        let result = match tool_params.name.as_str() {
            "habit_create" => self.call_tool(args, tools::create_habit),
            "habit_list" => self.call_tool(args, tools::list_habits),
            "habit_get" => self.call_tool(args, tools::get_habit),
            "habit_rename" => self.call_tool(args, tools::rename_habit),
            "habit_delete" => self.call_tool(args, tools::delete_habit),
            "habit_mark" => self.call_tool(args, tools::mark_habit),
            "habit_stats" => self.call_tool(args, tools::get_habit_stats),
            _ => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Unknown tool: {}", tool_params.name),
                    None,
                );
            }
        };

        JsonRpcResponse::success_from(id, &result)
    }

    /// Decode tool arguments, run the tool and wrap its outcome
    fn call_tool<P, R, F>(&self, args: Value, tool: F) -> ToolCallResult
    where
        P: DeserializeOwned,
        R: ToolResponse,
        F: FnOnce(&AppService, P) -> Result<R, HabitError>,
    {
        // missing arguments are treated as an empty object
        let args = if args.is_null() { json!({}) } else { args };

        let params: P = match serde_json::from_value(args) {
            Ok(p) => p,
            Err(e) => {
                return ToolCallResult::error(
                    format!("Invalid arguments: {}", e),
                    error_codes::INVALID_PARAMS,
                );
            }
        };

        match tool(self.habit_tracker.service(), params) {
            Ok(response) => {
                let structured = serde_json::to_value(&response).ok();
                ToolCallResult::success(response.message().to_string(), structured)
            }
            Err(e) => {
                debug!("Tool call rejected: {}", e);
                ToolCallResult::error(e.to_string(), habit_error_to_json_rpc_code(&e))
            }
        }
    }
}
