//! Top bar with the history and row controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Undo and redo are disabled at the ends of the history, so neither can be
//! triggered when there is nothing to step to.

use leptos::prelude::*;

use crate::app::Bench;
use crate::util::dom_id;

/// Undo / Redo / Add Row / Clear All.
#[component]
pub fn Toolbar() -> impl IntoView {
    let bench = expect_context::<RwSignal<Bench>>();

    let can_undo = move || bench.with(|b| b.can_undo());
    let can_redo = move || bench.with(|b| b.can_redo());

    let on_add_row = move |_| {
        bench.update(|b| {
            let row_id = b.add_row();
            log::debug!("toolbar: added {row_id}");
        });
    };

    view! {
        <div class="toolbar">
            <button
                id=dom_id::UNDO_BUTTON
                class="btn"
                disabled=move || !can_undo()
                on:click=move |_| bench.update(|b| {
                    b.undo();
                })
                title="Undo"
            >
                "Undo"
            </button>
            <button
                id=dom_id::REDO_BUTTON
                class="btn"
                disabled=move || !can_redo()
                on:click=move |_| bench.update(|b| {
                    b.redo();
                })
                title="Redo"
            >
                "Redo"
            </button>

            <span class="toolbar__spacer"></span>

            <button id=dom_id::ADD_ROW_BUTTON class="btn" on:click=on_add_row title="Add a fresh row">
                "Add Row"
            </button>
            <button
                id=dom_id::CLEAR_BUTTON
                class="btn toolbar__clear"
                on:click=move |_| bench.update(|b| b.clear())
                title="Reset to a single row and erase saved history"
            >
                "Clear All"
            </button>
        </div>
    }
}
