//! In-memory session tree
//!
//! Entries link to their parent by id, so one log can hold several branches
//! (forks, or new work after navigating back). The current position is the
//! leaf; `branch()` walks from the leaf up to the root and returns the path
//! in log order.

use std::collections::{HashMap, HashSet};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chrono::Utc;
use thiserror::Error;

use super::entry::{EntryKind, SessionEntry};

/// Session log errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid session entry on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("entry not found: {0}")]
    EntryNotFound(String),
}

/// Entries of one session with a movable leaf
#[derive(Debug, Clone, Default)]
pub struct SessionTree {
    entries: Vec<SessionEntry>,
    index: HashMap<String, usize>,
    leaf: Option<String>,
}

impl SessionTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries in log order; the last entry becomes the leaf
    pub fn from_entries(entries: impl IntoIterator<Item = SessionEntry>) -> Self {
        let mut tree = Self::new();
        for entry in entries {
            tree.push(entry);
        }
        tree
    }

    /// Load a JSONL log (one entry per line, blank lines ignored)
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let file = std::fs::File::open(path)?;
        let mut entries = Vec::new();

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: SessionEntry = serde_json::from_str(&line)
                .map_err(|source| SessionError::Decode {
                    line: idx + 1,
                    source,
                })?;
            entries.push(entry);
        }

        tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded session log");
        Ok(Self::from_entries(entries))
    }

    /// Append one entry to a JSONL log, creating the file if needed
    pub fn append_to_file(path: &Path, entry: &SessionEntry) -> Result<(), SessionError> {
        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Add an existing entry and move the leaf to it
    ///
    /// An entry without a parent link continues from the previous entry, so
    /// linear logs that never recorded parents still form a single branch.
    pub fn push(&mut self, mut entry: SessionEntry) {
        if entry.parent_id.is_none() {
            entry.parent_id = self.entries.last().map(|e| e.id.clone());
        }
        self.leaf = Some(entry.id.clone());
        self.index.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Create a new entry as a child of the current leaf
    pub fn append(&mut self, kind: EntryKind) -> &SessionEntry {
        let entry = SessionEntry::new(uuid::Uuid::new_v4().to_string(), self.leaf.clone(), kind)
            .with_timestamp(Utc::now());
        let idx = self.entries.len();
        self.leaf = Some(entry.id.clone());
        self.index.insert(entry.id.clone(), idx);
        self.entries.push(entry);
        &self.entries[idx]
    }

    /// Move the leaf to an existing entry (tree navigation or fork point)
    pub fn set_leaf(&mut self, id: &str) -> Result<(), SessionError> {
        if !self.index.contains_key(id) {
            return Err(SessionError::EntryNotFound(id.to_string()));
        }
        self.leaf = Some(id.to_string());
        Ok(())
    }

    pub fn leaf_id(&self) -> Option<&str> {
        self.leaf.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&SessionEntry> {
        self.index.get(id).map(|&idx| &self.entries[idx])
    }

    /// All entries in log order, across every branch
    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path from the root to the current leaf
    pub fn branch(&self) -> Vec<&SessionEntry> {
        match self.leaf.as_deref() {
            Some(leaf) => self.branch_from(leaf),
            None => Vec::new(),
        }
    }

    /// Path from the root to `id` (empty if `id` is unknown)
    pub fn branch_from(&self, id: &str) -> Vec<&SessionEntry> {
        let mut path = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.get(id);

        while let Some(entry) = current {
            if !seen.insert(entry.id.as_str()) {
                tracing::warn!(entry = %entry.id, "Cycle in session parent links");
                break;
            }
            path.push(entry);
            current = entry.parent_id.as_deref().and_then(|p| self.get(p));
        }

        path.reverse();
        path
    }
}
