//! plantrack core - plan tracking for coding-agent sessions
//!
//! This crate provides:
//! - Plan state and the step-status contract
//! - History replay that rebuilds plan state from a session branch
//! - The `todowrite` tool and its compact/detailed views
//! - The `plan` status command
//! - Per-session wiring of lifecycle events, tools and commands

pub mod commands;
pub mod config;
pub mod constants;
pub mod extension;
pub mod paths;
pub mod plan;
pub mod session;
pub mod theme;
pub mod tools;

// Re-exports for convenience
pub use commands::{Command, CommandContext, CommandRegistry, Notification, Notifier, NotifyLevel};
pub use config::Config;
pub use extension::{register_plan_extension, PlanSession, SessionEvent};
pub use plan::{PlanDetails, PlanState, Step, StepStatus};
pub use session::{AgentMessage, ContentBlock, EntryKind, SessionEntry, SessionTree};
pub use theme::{PlainStyler, Styler, ThemeColor};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};
