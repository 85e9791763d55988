//! Snapshot history with an undo/redo cursor and a pluggable persistence port.
//!
//! DESIGN
//! ======
//! The log is a `Vec<Snapshot>` plus a cursor that always indexes into it.
//! Committing after an undo truncates everything past the cursor before
//! appending, so redo only ever walks the branch that was last committed.
//! Undo and redo move the cursor and nothing else.
//!
//! Persistence goes through [`HistoryStore`], which deals in raw strings so
//! the browser implementation stays a thin wrapper over `localStorage`. The
//! whole log is written after every commit. Storage trouble is logged and
//! absorbed: a failed write never undoes an in-memory commit, and an
//! unreadable blob is treated as no history at all.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::BoardConfig;
use crate::row::Snapshot;

/// Error raised by a [`HistoryStore`] or while encoding the log.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No backing storage in this environment (no window, storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    /// The backend refused the write, e.g. quota exceeded.
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence port for the serialized snapshot log.
pub trait HistoryStore {
    /// Read the stored blob, `None` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend rejects the write.
    fn save(&self, raw: &str) -> Result<(), StoreError>;

    /// Erase the stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend rejects the removal.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same cell, so a test can keep a handle
/// and inspect what the history wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cell: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `raw`.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { cell: Rc::new(RefCell::new(Some(raw.into()))) }
    }

    /// Current stored blob.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.raw())
    }

    fn save(&self, raw: &str) -> Result<(), StoreError> {
        *self.cell.borrow_mut() = Some(raw.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.cell.borrow_mut() = None;
        Ok(())
    }
}

/// Linear snapshot log with a navigation cursor.
#[derive(Debug)]
pub struct History<S> {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    store: S,
    slots_per_row: u32,
    limit: Option<usize>,
}

impl<S: HistoryStore> History<S> {
    /// Restore the log from `store`, or start a fresh one.
    ///
    /// Missing, unreadable, or invalid data all yield the single initial
    /// snapshot. The cursor starts on the newest snapshot.
    pub fn load(store: S, config: &BoardConfig) -> Self {
        let restored = match store.load() {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => None,
            Err(e) => {
                log::warn!("history: storage read failed, starting fresh: {e}");
                None
            }
        };

        let mut snapshots = restored.unwrap_or_else(|| vec![Snapshot::initial(config.slots_per_row)]);
        trim_to_limit(&mut snapshots, config.history_limit);
        let cursor = snapshots.len() - 1;
        Self {
            snapshots,
            cursor,
            store,
            slots_per_row: config.slots_per_row,
            limit: config.history_limit,
        }
    }

    /// Snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Append `snapshot` after the cursor, discarding any redo branch.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        trim_to_limit(&mut self.snapshots, self.limit);
        self.cursor = self.snapshots.len() - 1;

        if let Err(e) = self.save() {
            log::warn!("history: failed to persist {} snapshots: {e}", self.snapshots.len());
        }
    }

    /// Step back one snapshot. Returns `false` at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one snapshot. Returns `false` at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Replace the log with the single initial snapshot and erase storage.
    pub fn reset(&mut self) {
        self.snapshots = vec![Snapshot::initial(self.slots_per_row)];
        self.cursor = 0;
        if let Err(e) = self.store.clear() {
            log::warn!("history: failed to clear stored history: {e}");
        }
    }

    /// Write the full log to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding fails or the store rejects the write.
    pub fn save(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.snapshots)?;
        self.store.save(&raw)
    }
}

/// Drop the oldest snapshots until at most `limit` remain (never fewer than one).
fn trim_to_limit(snapshots: &mut Vec<Snapshot>, limit: Option<usize>) {
    if let Some(limit) = limit {
        let excess = snapshots.len().saturating_sub(limit.max(1));
        snapshots.drain(..excess);
    }
}

/// Decode a stored log. Anything that would break the row invariants counts
/// as corrupt.
fn decode(raw: &str) -> Option<Vec<Snapshot>> {
    let snapshots: Vec<Snapshot> = match serde_json::from_str(raw) {
        Ok(snapshots) => snapshots,
        Err(e) => {
            log::warn!("history: stored history is corrupt, starting fresh: {e}");
            return None;
        }
    };
    if snapshots.is_empty() {
        log::warn!("history: stored history is empty, starting fresh");
        return None;
    }
    if let Some(snapshot) = snapshots.iter().find(|s| !s.has_unique_row_ids()) {
        let ids: Vec<&str> = snapshot.rows.iter().map(|r| r.row_id.as_str()).collect();
        log::warn!("history: stored snapshot repeats a row id ({}), starting fresh", ids.join(", "));
        return None;
    }
    let broken = snapshots.iter().flat_map(|s| &s.rows).find(|row| !row.is_conserved());
    if let Some(row) = broken {
        log::warn!("history: stored row {} does not hold a full token set, starting fresh", row.row_id);
        return None;
    }
    Some(snapshots)
}
