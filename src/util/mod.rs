//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, drag data) and element
//! naming from component logic so they can be tested without a browser.

pub mod dom_id;
pub mod drag;
pub mod storage;
