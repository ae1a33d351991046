//! Plan steps and the persisted plan payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status of a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl StepStatus {
    /// Icon shown next to the step in views and status reports
    pub fn icon(&self) -> &'static str {
        match self {
            StepStatus::Pending => "○",
            StepStatus::InProgress => "→",
            StepStatus::Completed => "✓",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "in_progress",
            StepStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(StepStatus::Pending),
            "in_progress" | "inprogress" => Ok(StepStatus::InProgress),
            "completed" | "complete" | "done" => Ok(StepStatus::Completed),
            _ => Err(format!("Unknown step status: {}", s)),
        }
    }
}

/// A single checklist item
///
/// Steps are values: an update replaces the whole list rather than editing
/// a step in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Step description (5-7 words by convention)
    pub step: String,
    pub status: StepStatus,
}

impl Step {
    pub fn new(step: impl Into<String>, status: StepStatus) -> Self {
        Self {
            step: step.into(),
            status,
        }
    }

    pub fn pending(step: impl Into<String>) -> Self {
        Self::new(step, StepStatus::Pending)
    }

    pub fn in_progress(step: impl Into<String>) -> Self {
        Self::new(step, StepStatus::InProgress)
    }

    pub fn completed(step: impl Into<String>) -> Self {
        Self::new(step, StepStatus::Completed)
    }
}

/// Number of completed steps
pub fn completed_count(steps: &[Step]) -> usize {
    steps
        .iter()
        .filter(|s| s.status == StepStatus::Completed)
        .count()
}

/// The step currently in progress
///
/// Only one step is expected to be in progress, but this is not enforced;
/// when several are, the first one wins.
pub fn first_in_progress(steps: &[Step]) -> Option<&Step> {
    steps.iter().find(|s| s.status == StepStatus::InProgress)
}

/// Structured payload of a `todowrite` result
///
/// Persisted verbatim by the host in the tool result's `details`, which is
/// what makes a plan replayable. The JSON shape must stay stable:
/// `{"steps": [{"step": .., "status": ..}], "explanation": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDetails {
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl PlanDetails {
    /// Decode a details payload, `None` if it carries no usable steps list
    pub fn from_value(value: &Value) -> Option<Self> {
        match PlanDetails::deserialize(value) {
            Ok(details) => Some(details),
            Err(e) => {
                tracing::debug!("Ignoring plan details without usable steps: {}", e);
                None
            }
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
