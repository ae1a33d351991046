//! Tool registry for managing available tools
//!
//! Tools run synchronously against the calling session's plan state, which
//! is handed to them through `ToolContext`.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::plan::PlanState;
use crate::session::{ContentBlock, ToolResultMessage};
use crate::theme::Styler;

/// Tool execution result
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// Text shown to the model
    pub content: Vec<ContentBlock>,
    /// Structured payload the host persists verbatim with the result
    pub details: Option<Value>,
    pub is_error: bool,
}

impl ToolResult {
    /// Create a success result
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            details: None,
            is_error: false,
        }
    }

    /// Create an error result with JSON-formatted error message
    pub fn error(msg: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ContentBlock::text(
                serde_json::json!({"error": msg.to_string()}).to_string(),
            )],
            details: None,
            is_error: true,
        }
    }

    /// Attach a structured payload
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// First text block, or an empty string
    pub fn text(&self) -> &str {
        self.content
            .first()
            .and_then(ContentBlock::as_text)
            .unwrap_or("")
    }

    /// Message the host records in the session log
    pub fn to_message(
        &self,
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
    ) -> ToolResultMessage {
        ToolResultMessage {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            content: self.content.clone(),
            details: self.details.clone(),
            is_error: self.is_error,
        }
    }
}

/// Parse tool parameters, returning a ToolResult error on failure
pub fn parse_params<T: serde::de::DeserializeOwned>(params: Value) -> Result<T, ToolResult> {
    serde_json::from_value(params)
        .map_err(|e| ToolResult::error(format!("Invalid parameters: {}", e)))
}

/// Context for tool execution
pub struct ToolContext<'a> {
    /// Plan state of the session the call belongs to
    pub plan: &'a mut PlanState,
    /// Tool call ID assigned by the model
    pub tool_call_id: Option<String>,
    /// Cancellation signal from the host
    pub cancellation: Option<CancellationToken>,
}

impl<'a> ToolContext<'a> {
    pub fn new(plan: &'a mut PlanState) -> Self {
        Self {
            plan,
            tool_call_id: None,
            cancellation: None,
        }
    }

    pub fn with_tool_call_id(mut self, id: impl Into<String>) -> Self {
        self.tool_call_id = Some(id.into());
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// Options for rendering a finished result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show everything instead of the truncated form
    pub expanded: bool,
}

/// Trait for tool implementations
pub trait Tool: Send + Sync {
    /// Tool name (id)
    fn name(&self) -> &str;

    /// Short label for the UI
    fn label(&self) -> &str;

    /// Tool description for AI
    fn description(&self) -> &str;

    /// JSON schema for parameters
    fn parameters_schema(&self) -> Value;

    /// Execute the tool
    fn execute(&self, params: Value, ctx: &mut ToolContext<'_>) -> ToolResult;

    /// One-line view of a pending or just-made call
    fn render_call(&self, args: &Value, theme: &dyn Styler) -> String;

    /// View of a finished result
    fn render_result(
        &self,
        result: &ToolResult,
        options: RenderOptions,
        theme: &dyn Styler,
    ) -> String;
}

/// Tool definition as advertised to the model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub label: String,
    pub description: String,
    pub input_schema: Value,
}

/// Registry for managing tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool (replaces any tool with the same name)
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        tracing::debug!(tool = %name, "Registered tool");
        self.tools.insert(name, tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// All tool definitions, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                label: t.label().to_string(),
                description: t.description().to_string(),
                input_schema: t.parameters_schema(),
            })
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool by name, `None` if no such tool is registered
    pub fn execute(
        &self,
        name: &str,
        params: Value,
        ctx: &mut ToolContext<'_>,
    ) -> Option<ToolResult> {
        let tool = self.get(name)?;
        let start = Instant::now();
        let result = tool.execute(params, ctx);

        if result.is_error {
            tracing::warn!(tool = name, output = result.text(), "Tool returned an error");
        } else {
            tracing::info!(
                tool = name,
                duration_us = start.elapsed().as_micros() as u64,
                "Tool executed"
            );
        }

        Some(result)
    }
}
