//! Plan tracking for one session context
//!
//! `PlanSession` owns the plan state of a single session. The host creates
//! one per session context and routes everything through it:
//! - lifecycle events rebuild the state by replaying the current branch
//! - tool calls get the state through `tool_context`
//! - commands read it through `command_context`
//!
//! There is no process-wide plan; two sessions never share state.

use std::sync::Arc;

use crate::commands::{CommandContext, CommandRegistry, Notifier, PlanCommand};
use crate::plan::{replay, PlanState};
use crate::session::SessionEntry;
use crate::tools::{TodoWriteTool, ToolContext, ToolRegistry};

/// Session lifecycle events that invalidate the current plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session was opened or resumed
    Start,
    /// The host switched to another session
    Switch,
    /// The session was forked from an earlier entry
    Fork,
    /// The user navigated to another point in the session tree
    Tree,
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::Start => write!(f, "session_start"),
            SessionEvent::Switch => write!(f, "session_switch"),
            SessionEvent::Fork => write!(f, "session_fork"),
            SessionEvent::Tree => write!(f, "session_tree"),
        }
    }
}

/// Plan state bound to one session context
#[derive(Debug, Clone, Default)]
pub struct PlanSession {
    state: PlanState,
}

impl PlanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    /// Rebuild the plan from the branch now current for this session
    ///
    /// Must run before the plan is rendered for the new context.
    pub fn handle_event<'a, I>(&mut self, event: SessionEvent, branch: I)
    where
        I: IntoIterator<Item = &'a SessionEntry>,
    {
        self.state.replace(replay(branch));
        tracing::info!(
            event = %event,
            steps = self.state.total(),
            completed = self.state.completed_count(),
            "Plan state rebuilt"
        );
    }

    /// Context for running a tool against this session's plan
    pub fn tool_context(&mut self) -> ToolContext<'_> {
        ToolContext::new(&mut self.state)
    }

    /// Context for running a command against this session's plan
    pub fn command_context<'a>(&'a self, notifier: &'a mut dyn Notifier) -> CommandContext<'a> {
        CommandContext::new(&self.state, notifier)
    }
}

/// Register the `todowrite` tool and the `plan` command
pub fn register_plan_extension(tools: &mut ToolRegistry, commands: &mut CommandRegistry) {
    tools.register(Arc::new(TodoWriteTool));
    commands.register(Arc::new(PlanCommand));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Notification, NotifyLevel};
    use crate::plan::Step;
    use crate::session::{AgentMessage, ContentBlock, EntryKind, SessionTree};
    use crate::tools::{RenderOptions, ToolResult};
    use crate::theme::PlainStyler;
    use serde_json::{json, Value};

    struct Host {
        tools: ToolRegistry,
        commands: CommandRegistry,
        tree: SessionTree,
        session: PlanSession,
    }

    impl Host {
        fn new() -> Self {
            let mut tools = ToolRegistry::new();
            let mut commands = CommandRegistry::new();
            register_plan_extension(&mut tools, &mut commands);
            Self {
                tools,
                commands,
                tree: SessionTree::new(),
                session: PlanSession::new(),
            }
        }

        fn say(&mut self, text: &str) {
            self.tree.append(EntryKind::Message {
                message: AgentMessage::User {
                    content: json!(text),
                },
            });
        }

        /// Execute todowrite and record call + result like a host would
        fn write(&mut self, args: Value) -> ToolResult {
            let call_id = format!("call-{}", self.tree.len());
            self.tree.append(EntryKind::Message {
                message: AgentMessage::Assistant {
                    content: vec![ContentBlock::ToolCall {
                        id: call_id.clone(),
                        name: "todowrite".to_string(),
                        arguments: args.clone(),
                    }],
                },
            });

            let mut ctx = self.session.tool_context().with_tool_call_id(call_id.clone());
            let result = self.tools.execute("todowrite", args, &mut ctx).unwrap();

            self.tree.append(EntryKind::Message {
                message: AgentMessage::ToolResult(result.to_message(call_id, "todowrite")),
            });
            result
        }

        fn fire(&mut self, event: SessionEvent) {
            let branch = self.tree.branch();
            self.session.handle_event(event, branch);
        }

        fn status(&self) -> Vec<Notification> {
            let mut out: Vec<Notification> = Vec::new();
            {
                let mut ctx = self.session.command_context(&mut out);
                self.commands.dispatch("/plan", &mut ctx);
            }
            out
        }
    }

    fn steps(items: &[(&str, &str)]) -> Value {
        json!({
            "steps": items
                .iter()
                .map(|(step, status)| json!({"step": step, "status": status}))
                .collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_empty_session_reports_no_plan() {
        let mut host = Host::new();
        host.fire(SessionEvent::Start);
        assert_eq!(
            host.status(),
            vec![Notification {
                level: NotifyLevel::Info,
                message: "No plan yet".to_string(),
            }]
        );
    }

    #[test]
    fn test_reload_recovers_latest_plan() {
        let mut host = Host::new();
        host.say("plan it");
        host.write(steps(&[("Draft", "in_progress"), ("Ship", "pending")]));
        host.say("progress");
        host.write(steps(&[("Draft", "completed"), ("Ship", "in_progress")]));
        let live = host.session.state().clone();

        // A fresh context sees nothing until the host fires a lifecycle event.
        host.session = PlanSession::new();
        assert!(host.session.state().is_empty());

        host.fire(SessionEvent::Switch);
        assert_eq!(host.session.state(), &live);
        assert_eq!(
            host.status()[0].message,
            "Plan: 1/2 completed\n\n✓ Draft\n→ Ship"
        );
    }

    #[test]
    fn test_tree_navigation_restores_earlier_plan() {
        let mut host = Host::new();
        host.write(steps(&[("First", "in_progress")]));
        let fork_point = host.tree.leaf_id().unwrap().to_string();
        host.write(steps(&[("First", "completed"), ("Second", "in_progress")]));

        host.tree.set_leaf(&fork_point).unwrap();
        host.fire(SessionEvent::Tree);
        assert_eq!(host.session.state().steps(), &[Step::in_progress("First")]);

        // New work on the fork does not see the abandoned branch.
        host.write(steps(&[("Other", "pending")]));
        host.fire(SessionEvent::Fork);
        assert_eq!(host.session.state().steps(), &[Step::pending("Other")]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut a = Host::new();
        let mut b = Host::new();
        a.write(steps(&[("Only in A", "pending")]));
        b.fire(SessionEvent::Start);

        assert_eq!(a.session.state().total(), 1);
        assert!(b.session.state().is_empty());
        assert_eq!(b.status()[0].message, "No plan yet");
    }

    #[test]
    fn test_rendered_result_matches_recorded_state() {
        let mut host = Host::new();
        let result = host.write(json!({
            "steps": [{"step": "A", "status": "completed"}, {"step": "B", "status": "pending"}],
            "explanation": "Split work"
        }));
        let tool = host.tools.get("todowrite").unwrap();

        assert_eq!(
            tool.render_result(&result, RenderOptions { expanded: true }, &PlainStyler),
            "↳ Split work\n\n✓ A\n○ B"
        );
        assert_eq!(host.session.state().explanation(), Some("Split work"));
    }
}
