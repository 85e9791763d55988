//! Deterministic element ids for rows, containers, tokens, and toolbar buttons.
//!
//! Ids are derived only from row id, container name, and token name, so the
//! same snapshot always renders the same ids.

#[cfg(test)]
#[path = "dom_id_test.rs"]
mod dom_id_test;

use workbench::row::Container;
use workbench::token::Token;

pub const UNDO_BUTTON: &str = "toolbar-undo";
pub const REDO_BUTTON: &str = "toolbar-redo";
pub const ADD_ROW_BUTTON: &str = "toolbar-add-row";
pub const CLEAR_BUTTON: &str = "toolbar-clear";

/// Id of a row block.
pub fn row(row_id: &str) -> String {
    row_id.to_owned()
}

/// Id of a drop container: `row-1-palette`, `row-1-trash`, `row-1-slot-1-2`.
pub fn container(row_id: &str, container: Container) -> String {
    format!("{row_id}-{container}")
}

/// Id of a draggable token: `row-1-palette-map`.
pub fn token(row_id: &str, container: Container, token: Token) -> String {
    format!("{row_id}-{container}-{token}")
}
