//! One row: palette, slots, and trash.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless projection of a [`Row`]. Re-rendered from the current snapshot
//! whenever the workbench changes.

use leptos::prelude::*;
use workbench::row::{Container, Row};

use crate::components::drop_zone::DropZone;
use crate::components::token_chip::TokenChip;
use crate::util::dom_id;

#[component]
pub fn RowBlock(row: Row) -> impl IntoView {
    let Row { row_id, palette, slots, trash } = row;

    let palette_chips = palette
        .into_iter()
        .map(|token| view! { <TokenChip row_id=row_id.clone() container=Container::Palette token/> })
        .collect_view();

    let trash_chips = trash
        .into_iter()
        .map(|token| view! { <TokenChip row_id=row_id.clone() container=Container::Trash token/> })
        .collect_view();

    let slot_zones = slots
        .into_iter()
        .map(|(key, held)| {
            let container = Container::Slot(key);
            let chip_row = row_id.clone();
            view! {
                <DropZone row_id=row_id.clone() container class_name="row-block__slot">
                    {held.map(|token| view! { <TokenChip row_id=chip_row container token/> })}
                </DropZone>
            }
        })
        .collect_view();

    view! {
        <section id=dom_id::row(&row_id) class="row-block">
            <div class="row-block__label">{row_id.clone()}</div>
            <DropZone row_id=row_id.clone() container=Container::Palette class_name="row-block__palette">
                {palette_chips}
            </DropZone>
            <div class="row-block__slots">{slot_zones}</div>
            <DropZone row_id=row_id.clone() container=Container::Trash class_name="row-block__trash">
                <span class="row-block__trash-label">"Trash"</span>
                {trash_chips}
            </DropZone>
        </section>
    }
}
