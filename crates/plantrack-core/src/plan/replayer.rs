//! Plan history replay
//!
//! Rebuilds plan state from the session branch (root to current leaf, already
//! resolved by the host). The plan lives only in `todowrite` tool results, so
//! switching, forking or navigating a session recovers it by scanning the
//! branch in order: the last plan result wins, earlier ones are discarded
//! entirely.

use crate::constants::tool;
use crate::session::{AgentMessage, EntryKind, SessionEntry, ToolResultMessage};

use super::state::PlanState;
use super::step::PlanDetails;

/// What a single branch entry means for the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayedEntry {
    /// A `todowrite` result carrying a plan
    PlanWrite(PlanDetails),
    /// Anything else
    Irrelevant,
}

/// Classify one entry
pub fn replay_entry(entry: &SessionEntry) -> ReplayedEntry {
    match &entry.kind {
        EntryKind::Message { message } => match message {
            AgentMessage::ToolResult(result) => plan_write(result),
            AgentMessage::User { .. } | AgentMessage::Assistant { .. } | AgentMessage::Other => {
                ReplayedEntry::Irrelevant
            }
        },
        EntryKind::ModelChange
        | EntryKind::ThinkingLevelChange
        | EntryKind::Compaction
        | EntryKind::BranchSummary
        | EntryKind::Custom
        | EntryKind::CustomMessage
        | EntryKind::Label
        | EntryKind::Unknown => ReplayedEntry::Irrelevant,
    }
}

fn plan_write(result: &ToolResultMessage) -> ReplayedEntry {
    if result.tool_name != tool::NAME {
        return ReplayedEntry::Irrelevant;
    }
    match result.details.as_ref().and_then(PlanDetails::from_value) {
        Some(details) => ReplayedEntry::PlanWrite(details),
        None => ReplayedEntry::Irrelevant,
    }
}

/// Derive plan state from an ordered branch
///
/// Single pass, last write wins. Replaying the same entries always yields
/// the same state.
pub fn replay<'a, I>(entries: I) -> PlanState
where
    I: IntoIterator<Item = &'a SessionEntry>,
{
    let mut state = PlanState::new();
    let mut scanned = 0usize;
    let mut writes = 0usize;

    for entry in entries {
        scanned += 1;
        if let ReplayedEntry::PlanWrite(details) = replay_entry(entry) {
            state = PlanState::from(details);
            writes += 1;
        }
    }

    tracing::debug!(
        entries = scanned,
        plan_writes = writes,
        steps = state.total(),
        "Replayed plan history"
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Step;
    use crate::session::ContentBlock;
    use serde_json::{json, Value};

    fn entry(id: usize, kind: EntryKind) -> SessionEntry {
        SessionEntry::new(format!("e{}", id), None, kind)
    }

    fn tool_result(id: usize, tool_name: &str, details: Option<Value>) -> SessionEntry {
        entry(
            id,
            EntryKind::Message {
                message: AgentMessage::ToolResult(ToolResultMessage {
                    tool_call_id: format!("call-{}", id),
                    tool_name: tool_name.to_string(),
                    content: vec![ContentBlock::text("ok")],
                    details,
                    is_error: false,
                }),
            },
        )
    }

    fn plan_entry(id: usize, steps: Value, explanation: Option<&str>) -> SessionEntry {
        let mut details = json!({ "steps": steps });
        if let Some(e) = explanation {
            details["explanation"] = json!(e);
        }
        tool_result(id, "todowrite", Some(details))
    }

    fn noise(id: usize) -> Vec<SessionEntry> {
        vec![
            entry(
                id,
                EntryKind::Message {
                    message: AgentMessage::User {
                        content: json!("please plan"),
                    },
                },
            ),
            tool_result(id + 1, "bash", Some(json!({"steps": [{"step": "fake", "status": "pending"}]}))),
            entry(id + 2, EntryKind::ModelChange),
            entry(id + 3, EntryKind::Compaction),
            entry(id + 4, EntryKind::Unknown),
        ]
    }

    #[test]
    fn test_empty_log_gives_empty_state() {
        let log: Vec<SessionEntry> = Vec::new();
        let state = replay(&log);
        assert!(state.is_empty());
        assert!(state.explanation().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let log = vec![
            plan_entry(
                1,
                json!([{"step": "Old A", "status": "completed"}, {"step": "Old B", "status": "pending"}]),
                Some("first"),
            ),
            plan_entry(2, json!([{"step": "New", "status": "in_progress"}]), None),
        ];

        let state = replay(&log);
        assert_eq!(state.steps(), &[Step::in_progress("New")]);
        assert!(state.explanation().is_none());
    }

    #[test]
    fn test_replay_is_idempotent() {
        let mut log = noise(10);
        log.push(plan_entry(
            1,
            json!([{"step": "A", "status": "completed"}, {"step": "B", "status": "in_progress"}]),
            Some("because"),
        ));
        log.extend(noise(20));

        let first = replay(&log);
        let second = replay(&log);
        assert_eq!(first, second);
        assert_eq!(first.explanation(), Some("because"));
    }

    #[test]
    fn test_irrelevant_entries_do_not_change_result() {
        let plans = vec![
            plan_entry(1, json!([{"step": "A", "status": "pending"}]), None),
            plan_entry(2, json!([{"step": "B", "status": "completed"}]), Some("done")),
        ];

        let mut noisy = noise(100);
        noisy.push(plans[0].clone());
        noisy.extend(noise(200));
        noisy.push(plans[1].clone());
        noisy.extend(noise(300));

        assert_eq!(replay(&plans), replay(&noisy));
    }

    #[test]
    fn test_results_without_usable_steps_are_skipped() {
        let log = vec![
            plan_entry(1, json!([{"step": "Keep me", "status": "pending"}]), None),
            tool_result(2, "todowrite", None),
            tool_result(3, "todowrite", Some(json!({"explanation": "no steps"}))),
            tool_result(4, "todowrite", Some(json!({"steps": [{"step": "x", "status": "blocked"}]}))),
        ];

        let state = replay(&log);
        assert_eq!(state.steps(), &[Step::pending("Keep me")]);
    }

    #[test]
    fn test_empty_steps_payload_resets_plan() {
        let log = vec![
            plan_entry(1, json!([{"step": "A", "status": "pending"}]), None),
            plan_entry(2, json!([]), None),
        ];
        assert!(replay(&log).is_empty());
    }

    #[test]
    fn test_classify_other_tool_is_irrelevant() {
        let e = tool_result(1, "read", Some(json!({"steps": []})));
        assert_eq!(replay_entry(&e), ReplayedEntry::Irrelevant);
    }
}
