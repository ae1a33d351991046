//! TodoWrite tool - Declare and update the session plan
//!
//! Each call replaces the whole plan. The result's details carry the plan in
//! the shape replay looks for, which is how the plan survives session
//! switches, forks and reloads.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::tool;
use crate::plan::{view, PlanDetails, Step};
use crate::theme::Styler;
use crate::tools::registry::{parse_params, RenderOptions, Tool, ToolContext, ToolResult};

/// Arguments accepted by `todowrite`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoWriteParams {
    pub steps: Vec<Step>,
    #[serde(default)]
    pub explanation: Option<String>,
}

pub struct TodoWriteTool;

impl TodoWriteTool {
    /// Summary text returned to the model
    pub fn summary(params: &TodoWriteParams) -> String {
        let completed = crate::plan::completed_count(&params.steps);
        let mut text = format!(
            "Plan updated: {}/{} completed",
            completed,
            params.steps.len()
        );
        if let Some(current) = crate::plan::first_in_progress(&params.steps) {
            text.push_str(&format!("\nCurrent: {}", current.step));
        }
        if let Some(explanation) = params.explanation.as_deref().filter(|e| !e.is_empty()) {
            text.push_str(&format!("\nRationale: {}", explanation));
        }
        text
    }
}

impl Tool for TodoWriteTool {
    fn name(&self) -> &str {
        tool::NAME
    }

    fn label(&self) -> &str {
        tool::LABEL
    }

    fn description(&self) -> &str {
        tool::DESCRIPTION
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "steps": {
                    "type": "array",
                    "description": "List of steps with their status",
                    "items": {
                        "type": "object",
                        "properties": {
                            "step": {
                                "type": "string",
                                "description": "Step description (5-7 words)"
                            },
                            "status": {
                                "type": "string",
                                "enum": ["pending", "in_progress", "completed"]
                            }
                        },
                        "required": ["step", "status"],
                        "additionalProperties": false
                    }
                },
                "explanation": {
                    "type": "string",
                    "description": "Rationale for plan changes"
                }
            },
            "required": ["steps"],
            "additionalProperties": false
        })
    }

    fn execute(&self, params: Value, ctx: &mut ToolContext<'_>) -> ToolResult {
        // Nothing here can be suspended, so a cancellation request has no effect.
        let params: TodoWriteParams = match parse_params(params) {
            Ok(p) => p,
            Err(e) => return e,
        };

        let text = Self::summary(&params);
        let details = PlanDetails {
            steps: params.steps,
            explanation: params.explanation,
        };

        tracing::info!(
            tool = tool::NAME,
            completed = crate::plan::completed_count(&details.steps),
            total = details.steps.len(),
            "Plan updated"
        );

        let payload = details.to_value();
        ctx.plan.update(details.steps, details.explanation);

        ToolResult::success(text).with_details(payload)
    }

    fn render_call(&self, args: &Value, theme: &dyn Styler) -> String {
        let steps: Vec<Step> = args
            .get("steps")
            .and_then(|s| Vec::<Step>::deserialize(s).ok())
            .unwrap_or_default();
        view::render_call(&steps, theme)
    }

    fn render_result(
        &self,
        result: &ToolResult,
        options: RenderOptions,
        theme: &dyn Styler,
    ) -> String {
        let details = result.details.as_ref().and_then(PlanDetails::from_value);
        view::render_result(details.as_ref(), result.text(), options.expanded, theme)
    }
}
