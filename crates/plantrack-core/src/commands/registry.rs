//! Command registry and notification plumbing

use std::collections::HashMap;
use std::sync::Arc;

use crate::plan::PlanState;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyLevel::Info => write!(f, "info"),
            NotifyLevel::Warning => write!(f, "warning"),
            NotifyLevel::Error => write!(f, "error"),
        }
    }
}

/// Receives notifications emitted by commands
pub trait Notifier {
    fn notify(&mut self, message: &str, level: NotifyLevel);
}

/// A recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub message: String,
}

/// Collects notifications in order (used by tests and buffered hosts)
impl Notifier for Vec<Notification> {
    fn notify(&mut self, message: &str, level: NotifyLevel) {
        self.push(Notification {
            level,
            message: message.to_string(),
        });
    }
}

/// Context for command execution
pub struct CommandContext<'a> {
    /// Plan state of the session the command runs in
    pub plan: &'a PlanState,
    pub notifier: &'a mut dyn Notifier,
}

impl<'a> CommandContext<'a> {
    pub fn new(plan: &'a PlanState, notifier: &'a mut dyn Notifier) -> Self {
        Self { plan, notifier }
    }

    pub fn notify(&mut self, message: &str, level: NotifyLevel) {
        self.notifier.notify(message, level);
    }
}

/// Trait for command implementations
pub trait Command: Send + Sync {
    /// Command name, without the leading slash
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Run with whatever followed the command name
    fn run(&self, args: &str, ctx: &mut CommandContext<'_>);
}

/// Registry for managing commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command (replaces any command with the same name)
    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_lowercase();
        tracing::debug!(command = %name, "Registered command");
        self.commands.insert(name, command);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(&name.to_lowercase()).cloned()
    }

    /// (name, description) pairs sorted by name
    pub fn list(&self) -> Vec<(String, String)> {
        let mut items: Vec<(String, String)> = self
            .commands
            .values()
            .map(|c| (c.name().to_string(), c.description().to_string()))
            .collect();
        items.sort();
        items
    }

    /// Parse and run a command line such as `/plan` or `plan extra args`
    ///
    /// Returns false (after notifying) when the command is unknown.
    pub fn dispatch(&self, input: &str, ctx: &mut CommandContext<'_>) -> bool {
        let input = input.trim();
        let (head, args) = match input.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (input, ""),
        };
        let name = head.trim_start_matches('/');

        match self.get(name) {
            Some(command) => {
                tracing::info!(command = name, "Running command");
                command.run(args, ctx);
                true
            }
            None => {
                ctx.notify(&format!("Unknown command: {}", input), NotifyLevel::Warning);
                false
            }
        }
    }
}
