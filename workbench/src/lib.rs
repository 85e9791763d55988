//! Arrangement core for the function-slot workbench.
//!
//! This crate holds everything about the workbench that does not need a
//! browser: the token set, rows and their containers, the drag payload
//! format, the pure drop transition, and the snapshot history with its
//! persistence port. The `fn-slots` UI crate renders a [`row::Snapshot`] and
//! forwards user gestures to an [`engine::Workbench`]; it never mutates rows
//! itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::Workbench`] facade driven by the UI |
//! | [`transition`] | Pure `snapshot × move → snapshot` drop handling |
//! | [`history`] | Snapshot log, undo/redo cursor, [`history::HistoryStore`] port |
//! | [`payload`] | Drag payload parse/encode |
//! | [`row`] | Rows, slots, containers, snapshots |
//! | [`token`] | The closed set of function tokens |
//! | [`config`] | Storage key, slot count, history limit |
//! | [`consts`] | Shared defaults and id prefixes |

pub mod config;
pub mod consts;
pub mod engine;
pub mod history;
pub mod payload;
pub mod row;
pub mod token;
pub mod transition;
