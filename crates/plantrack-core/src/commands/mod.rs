//! Slash commands
//!
//! Commands are read-only reports; they talk back to the user through a
//! `Notifier` rather than returning text.

pub mod plan;
pub mod registry;

pub use plan::{status_report, PlanCommand};
pub use registry::{Command, CommandContext, CommandRegistry, Notification, Notifier, NotifyLevel};
