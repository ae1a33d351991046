//! Text views of a plan for the host UI
//!
//! - Compact: one line for a pending or just-made tool call
//!   (`todowrite 1/3 → Review code`)
//! - Detailed: rationale plus one line per step for a finished result,
//!   truncated unless the host asks for the expanded form

use crate::constants::tool;
use crate::constants::view::COLLAPSED_STEP_LIMIT;
use crate::theme::{Styler, ThemeColor};

use super::step::{completed_count, first_in_progress, PlanDetails, Step, StepStatus};

/// Compact view: label, progress and the in-progress step
pub fn render_call(steps: &[Step], theme: &dyn Styler) -> String {
    let mut text = theme.fg(
        ThemeColor::ToolTitle,
        &theme.bold(&format!("{} ", tool::NAME)),
    );
    text.push_str(&theme.fg(
        ThemeColor::Muted,
        &format!("{}/{}", completed_count(steps), steps.len()),
    ));
    if let Some(current) = first_in_progress(steps) {
        text.push_str(&theme.fg(ThemeColor::Dim, &format!(" → {}", current.step)));
    }
    text
}

/// Detailed view of a finished result
///
/// Results without a structured plan (older logs, error results) fall back
/// to the raw summary text.
pub fn render_result(
    details: Option<&PlanDetails>,
    fallback: &str,
    expanded: bool,
    theme: &dyn Styler,
) -> String {
    let Some(details) = details else {
        return fallback.to_string();
    };

    let mut lines = Vec::new();

    if let Some(explanation) = details.explanation.as_deref().filter(|e| !e.is_empty()) {
        lines.push(theme.fg(ThemeColor::Dim, &format!("↳ {}", explanation)));
        lines.push(String::new());
    }

    let steps = &details.steps;
    let shown = if expanded {
        steps.len()
    } else {
        steps.len().min(COLLAPSED_STEP_LIMIT)
    };

    for step in &steps[..shown] {
        lines.push(step_line(step, theme));
    }

    if shown < steps.len() {
        lines.push(theme.fg(
            ThemeColor::Dim,
            &format!("... {} more steps", steps.len() - shown),
        ));
    }

    lines.join("\n")
}

fn step_line(step: &Step, theme: &dyn Styler) -> String {
    let (icon_color, text_color) = match step.status {
        StepStatus::Completed => (ThemeColor::Success, ThemeColor::Dim),
        StepStatus::InProgress => (ThemeColor::Accent, ThemeColor::Text),
        StepStatus::Pending => (ThemeColor::Dim, ThemeColor::Muted),
    };
    format!(
        "{} {}",
        theme.fg(icon_color, step.status.icon()),
        theme.fg(text_color, &step.step)
    )
}
