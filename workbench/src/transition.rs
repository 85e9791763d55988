//! Drop handling as a pure function over snapshots.
//!
//! DESIGN
//! ======
//! [`apply_move`] never mutates its input. It clones the snapshot's rows,
//! rewrites only the row named by the move, and returns the result. Every
//! rejection leaves the caller with the snapshot it already had, so an
//! ignored drop produces no history entry.
//!
//! A displaced slot occupant always goes back to where the dragged token
//! came from: into the source slot for slot-to-slot drops, otherwise onto
//! the end of the source palette or trash. That keeps each row's token set
//! intact across every accepted move.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::payload::DragPayload;
use crate::row::{Container, Row, SlotKey, Snapshot};
use crate::token::Token;

/// A drop request: the dragged token's origin plus the drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub source: DragPayload,
    pub target_row: String,
    pub target: Container,
}

impl Move {
    #[must_use]
    pub fn new(source: DragPayload, target_row: impl Into<String>, target: Container) -> Self {
        Self { source, target_row: target_row.into(), target }
    }
}

/// Why a move produced no new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejected {
    #[error("token from {source_row} cannot be dropped on {target_row}")]
    CrossRow { source_row: String, target_row: String },
    #[error("{0} is both source and target")]
    SameContainer(Container),
    #[error("row {0} is not in the current snapshot")]
    UnknownRow(String),
    #[error("row {row} has no slot {slot}")]
    UnknownSlot { row: String, slot: SlotKey },
    #[error("{token} is not in {container} of row {row}")]
    TokenMissing { row: String, container: Container, token: Token },
}

/// Compute the snapshot that results from dropping `mv.source` on `mv.target`.
///
/// # Errors
///
/// Returns [`MoveRejected`] when the drop crosses rows, targets its own
/// container, names a row or slot that does not exist, or names a token that
/// is not in the stated source container.
pub fn apply_move(snapshot: &Snapshot, mv: &Move) -> Result<Snapshot, MoveRejected> {
    let source = &mv.source;
    if source.row_id != mv.target_row {
        return Err(MoveRejected::CrossRow {
            source_row: source.row_id.clone(),
            target_row: mv.target_row.clone(),
        });
    }
    if source.container == mv.target {
        return Err(MoveRejected::SameContainer(mv.target));
    }

    let index = snapshot
        .rows
        .iter()
        .position(|r| r.row_id == mv.target_row)
        .ok_or_else(|| MoveRejected::UnknownRow(mv.target_row.clone()))?;
    let row = &snapshot.rows[index];
    if let Container::Slot(slot) = mv.target {
        if !row.slots.contains_key(&slot) {
            return Err(MoveRejected::UnknownSlot { row: row.row_id.clone(), slot });
        }
    }

    let next = move_within(row, source, mv.target)?;
    let mut rows = snapshot.rows.clone();
    rows[index] = next;
    Ok(Snapshot { rows })
}

fn move_within(row: &Row, source: &DragPayload, target: Container) -> Result<Row, MoveRejected> {
    let mut next = row.clone();
    take(&mut next, source.container, source.token)?;

    let displaced = match target {
        Container::Palette => {
            next.palette.push(source.token);
            None
        }
        Container::Trash => {
            next.trash.push(source.token);
            None
        }
        Container::Slot(slot) => next.slots.insert(slot, Some(source.token)).flatten(),
    };

    if let Some(token) = displaced {
        match source.container {
            Container::Palette => next.palette.push(token),
            Container::Trash => next.trash.push(token),
            Container::Slot(slot) => {
                next.slots.insert(slot, Some(token));
            }
        }
    }
    Ok(next)
}

fn take(row: &mut Row, container: Container, token: Token) -> Result<(), MoveRejected> {
    let row_id = row.row_id.clone();
    let missing = || MoveRejected::TokenMissing { row: row_id.clone(), container, token };
    match container {
        Container::Palette => {
            let index = row.palette.iter().position(|t| *t == token).ok_or_else(missing)?;
            row.palette.remove(index);
        }
        Container::Trash => {
            let index = row.trash.iter().position(|t| *t == token).ok_or_else(missing)?;
            row.trash.remove(index);
        }
        Container::Slot(slot) => match row.slots.get_mut(&slot) {
            Some(held) if *held == Some(token) => *held = None,
            _ => return Err(missing()),
        },
    }
    Ok(())
}
