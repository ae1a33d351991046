//! Session log model
//!
//! The host owns the session log; this module gives it a typed shape:
//! - `entry`: tagged entry and message variants, matched exhaustively
//! - `tree`: id/parent-linked entries with branch resolution and JSONL I/O

mod entry;
mod tree;

pub use entry::{AgentMessage, ContentBlock, EntryKind, SessionEntry, ToolResultMessage};
pub use tree::{SessionError, SessionTree};
