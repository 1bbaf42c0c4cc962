use serde::{Deserialize, Serialize};

/// One tracked target directory, as persisted in the state file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StateEntry {
    pub(crate) dir: String,
    pub(crate) last_index: u64,
}

/// In-memory view of the state file: the last used index per directory.
///
/// Holds at most one entry per directory, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IndexStore {
    entries: Vec<StateEntry>,
}

impl IndexStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Build a store from persisted entries, folding duplicate directories
    /// into a single entry that keeps the highest index.
    pub(crate) fn from_entries(entries: Vec<StateEntry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.advance(&entry.dir, entry.last_index);
        }
        store
    }

    pub(crate) fn entries(&self) -> &[StateEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last recorded index for `dir`; `None` means nothing was generated
    /// there yet, so the next index is 0.
    pub(crate) fn last_index(&self, dir: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.dir == dir)
            .map(|e| e.last_index)
    }

    /// Upsert the entry for `dir`, setting it to exactly `index`.
    pub(crate) fn record(&mut self, dir: &str, index: u64) {
        match self.entries.iter_mut().find(|e| e.dir == dir) {
            Some(entry) => entry.last_index = index,
            None => self.entries.push(StateEntry {
                dir: dir.to_string(),
                last_index: index,
            }),
        }
    }

    /// Record `max(current, index)` for `dir` and return the stored value.
    pub(crate) fn advance(&mut self, dir: &str, index: u64) -> u64 {
        let next = self.last_index(dir).map_or(index, |last| last.max(index));
        self.record(dir, next);
        next
    }
}
