use crate::config::BoardConfig;
use crate::history::{History, HistoryStore};
use crate::payload::{DragPayload, PayloadError};
use crate::row::{Container, Snapshot};
use crate::transition::{Move, MoveRejected, apply_move};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Why a drop left the workbench unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Rejected(#[from] MoveRejected),
}

/// Everything the toolbar and rows can ask of the workbench.
///
/// Separated from the UI so it can be tested without WASM/browser dependencies.
#[derive(Debug)]
pub struct Workbench<S> {
    history: History<S>,
    config: BoardConfig,
}

impl<S: HistoryStore> Workbench<S> {
    /// Open the workbench on whatever history `store` holds.
    pub fn open(store: S, config: BoardConfig) -> Self {
        let history = History::load(store, &config);
        Self { history, config }
    }

    // --- Queries ---

    /// The snapshot currently on screen.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        self.history.current()
    }

    #[must_use]
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Mutations ---

    /// Handle a drop of the raw drag payload onto `target` in `target_row`.
    ///
    /// # Errors
    ///
    /// Returns [`DropError`] when the payload does not parse or the move is
    /// rejected. No snapshot is committed in either case.
    pub fn drop_token(&mut self, raw_payload: &str, target_row: &str, target: Container) -> Result<(), DropError> {
        let source: DragPayload = raw_payload.parse()?;
        self.apply(Move::new(source, target_row, target))?;
        Ok(())
    }

    /// Apply an already-parsed move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] when the move is not allowed.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveRejected> {
        let next = apply_move(self.history.current(), &mv)?;
        self.history.commit(next);
        Ok(())
    }

    /// Append a fresh row and return its id.
    pub fn add_row(&mut self) -> String {
        let next = self.history.current().with_added_row(self.config.slots_per_row);
        let row_id = next.rows.last().map(|row| row.row_id.clone()).unwrap_or_default();
        self.history.commit(next);
        row_id
    }

    /// Drop all history and storage; back to a single fresh row.
    pub fn clear(&mut self) {
        self.history.reset();
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }
}
