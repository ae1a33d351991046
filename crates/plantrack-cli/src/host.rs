//! Minimal session host
//!
//! Loads a session log, keeps one `PlanSession` for it, fires lifecycle
//! events, runs the `todowrite` tool and the `plan` command, and appends the
//! resulting tool call/result entries back to the log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use plantrack_core::constants::{command, tool};
use plantrack_core::plan::view;
use plantrack_core::session::{AgentMessage, ContentBlock, EntryKind, SessionTree};
use plantrack_core::tools::{RenderOptions, ToolDefinition};
use plantrack_core::{
    register_plan_extension, CommandRegistry, Notifier, NotifyLevel, PlanSession, PlanState,
    SessionEvent, Styler, ToolRegistry,
};

/// Rendered output of one tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Compact view of the call
    pub call: String,
    /// Detailed view of the result
    pub result: String,
    /// Text returned to the model
    pub summary: String,
    pub is_error: bool,
}

/// One session context backed by an optional JSONL log file
pub struct Host {
    tree: SessionTree,
    log_path: Option<PathBuf>,
    session: PlanSession,
    tools: ToolRegistry,
    commands: CommandRegistry,
}

impl Host {
    /// Open a session; a missing log file starts an empty session
    pub fn open(log_path: Option<PathBuf>) -> Result<Self> {
        let tree = match &log_path {
            Some(path) if path.exists() => SessionTree::load(path)
                .with_context(|| format!("Failed to load session log {}", path.display()))?,
            _ => SessionTree::new(),
        };

        let mut tools = ToolRegistry::new();
        let mut commands = CommandRegistry::new();
        register_plan_extension(&mut tools, &mut commands);

        let mut host = Self {
            tree,
            log_path,
            session: PlanSession::new(),
            tools,
            commands,
        };
        host.fire(SessionEvent::Start);
        Ok(host)
    }

    fn fire(&mut self, event: SessionEvent) {
        let branch = self.tree.branch();
        self.session.handle_event(event, branch);
    }

    /// Move to another entry in the session tree and rebuild the plan
    pub fn navigate(&mut self, entry_id: &str) -> Result<()> {
        self.tree
            .set_leaf(entry_id)
            .with_context(|| format!("Cannot navigate to entry {}", entry_id))?;
        tracing::info!(entry = entry_id, "Navigated session tree");
        self.fire(SessionEvent::Tree);
        Ok(())
    }

    pub fn plan(&self) -> &PlanState {
        self.session.state()
    }

    pub fn leaf_id(&self) -> Option<&str> {
        self.tree.leaf_id()
    }

    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.definitions()
    }

    /// Run a slash command against the current plan
    pub fn run_command(&self, input: &str, notifier: &mut dyn Notifier) -> bool {
        let mut ctx = self.session.command_context(notifier);
        self.commands.dispatch(input, &mut ctx)
    }

    /// Show the current plan via the `plan` command
    pub fn status(&self, notifier: &mut dyn Notifier) {
        self.run_command(command::PLAN, notifier);
    }

    /// Invoke `todowrite` as the agent would and record the exchange
    pub fn write(
        &mut self,
        steps: Value,
        explanation: Option<String>,
        styler: &dyn Styler,
        expanded: bool,
    ) -> Result<WriteOutcome> {
        let mut args = json!({ "steps": steps });
        if let Some(explanation) = explanation {
            args["explanation"] = Value::String(explanation);
        }

        let todowrite = self
            .tools
            .get(tool::NAME)
            .context("todowrite tool is not registered")?;
        let call_id = format!("call_{}", uuid::Uuid::new_v4().simple());
        let call = todowrite.render_call(&args, styler);

        self.record(EntryKind::Message {
            message: AgentMessage::Assistant {
                content: vec![ContentBlock::ToolCall {
                    id: call_id.clone(),
                    name: tool::NAME.to_string(),
                    arguments: args.clone(),
                }],
            },
        })?;

        let result = {
            let mut ctx = self.session.tool_context().with_tool_call_id(call_id.clone());
            self.tools
                .execute(tool::NAME, args, &mut ctx)
                .context("todowrite tool is not registered")?
        };

        self.record(EntryKind::Message {
            message: AgentMessage::ToolResult(result.to_message(call_id, tool::NAME)),
        })?;

        Ok(WriteOutcome {
            call,
            result: todowrite.render_result(&result, RenderOptions { expanded }, styler),
            summary: result.text().to_string(),
            is_error: result.is_error,
        })
    }

    /// Detailed view of the current plan
    pub fn show(&self, styler: &dyn Styler, expanded: bool) -> String {
        let plan = self.session.state();
        if plan.is_empty() {
            return "No plan yet".to_string();
        }
        view::render_result(Some(&plan.to_details()), "", expanded, styler)
    }

    fn record(&mut self, kind: EntryKind) -> Result<()> {
        let entry = self.tree.append(kind);
        if let Some(path) = &self.log_path {
            SessionTree::append_to_file(path, entry)
                .with_context(|| format!("Failed to append to session log {}", path.display()))?;
        }
        Ok(())
    }
}

/// Prints notifications to the terminal
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str, level: NotifyLevel) {
        match level {
            NotifyLevel::Info => println!("{}", message),
            NotifyLevel::Warning | NotifyLevel::Error => eprintln!("{}: {}", level, message),
        }
    }
}
