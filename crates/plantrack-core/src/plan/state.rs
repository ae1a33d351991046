//! Current plan state for one session context

use super::step::{completed_count, first_in_progress, PlanDetails, Step};

/// The plan as last written by the tool or rebuilt by replay
///
/// Updates always replace the whole state. Nothing here validates input or
/// can fail; schema checks happen where tool arguments are decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanState {
    steps: Vec<Step>,
    explanation: Option<String>,
}

impl PlanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the plan with a new step list and explanation
    pub fn update(&mut self, steps: Vec<Step>, explanation: Option<String>) {
        *self = Self { steps, explanation };
    }

    /// Install a whole state (used after replay)
    pub fn replace(&mut self, state: PlanState) {
        *self = state;
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// True when no plan has been set (or the last update was empty)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn completed_count(&self) -> usize {
        completed_count(&self.steps)
    }

    /// The in-progress step, if any (first one when several are marked)
    pub fn in_progress(&self) -> Option<&Step> {
        first_in_progress(&self.steps)
    }

    /// Payload persisted with a tool result
    pub fn to_details(&self) -> PlanDetails {
        PlanDetails {
            steps: self.steps.clone(),
            explanation: self.explanation.clone(),
        }
    }
}

impl From<PlanDetails> for PlanState {
    fn from(details: PlanDetails) -> Self {
        Self {
            steps: details.steps,
            explanation: details.explanation,
        }
    }
}
