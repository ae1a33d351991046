//! `/plan` - show the current plan and progress

use crate::constants::command;
use crate::plan::PlanState;

use super::registry::{Command, CommandContext, NotifyLevel};

pub struct PlanCommand;

impl Command for PlanCommand {
    fn name(&self) -> &str {
        command::PLAN
    }

    fn description(&self) -> &str {
        command::PLAN_DESCRIPTION
    }

    fn run(&self, _args: &str, ctx: &mut CommandContext<'_>) {
        if ctx.plan.is_empty() {
            ctx.notify("No plan yet", NotifyLevel::Info);
            return;
        }
        let report = status_report(ctx.plan);
        ctx.notify(&report, NotifyLevel::Info);
    }
}

/// Multi-line progress report for a non-empty plan
pub fn status_report(plan: &PlanState) -> String {
    let mut msg = format!(
        "Plan: {}/{} completed\n\n",
        plan.completed_count(),
        plan.total()
    );
    for step in plan.steps() {
        msg.push_str(&format!("{} {}\n", step.status.icon(), step.step));
    }
    msg.trim_end().to_string()
}
