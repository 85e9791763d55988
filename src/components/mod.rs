//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components project the current snapshot into drop targets and drag
//! sources, and forward gestures to the workbench from Leptos context.

pub mod drop_zone;
pub mod row_block;
pub mod token_chip;
pub mod toolbar;
