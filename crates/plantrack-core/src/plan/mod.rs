//! Plan tracking
//!
//! A plan is an ordered checklist of steps, each pending, in progress or
//! completed. It has no storage of its own:
//! - `state` holds the current plan for one session context
//! - `replayer` rebuilds that state from the session branch
//! - `view` renders the compact and detailed tool views

mod replayer;
mod state;
mod step;
pub mod view;

pub use replayer::{replay, replay_entry, ReplayedEntry};
pub use state::PlanState;
pub use step::{completed_count, first_in_progress, PlanDetails, Step, StepStatus};
