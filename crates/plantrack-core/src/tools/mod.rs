//! Tools for plantrack
//!
//! Provides the tool registry and the `todowrite` plan tool.

pub mod registry;
pub mod todowrite;

pub use registry::{
    parse_params, RenderOptions, Tool, ToolContext, ToolDefinition, ToolRegistry, ToolResult,
};
pub use todowrite::{TodoWriteParams, TodoWriteTool};
