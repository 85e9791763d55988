//! Drop target wrapper used for palettes, slots, and trash bins.
//!
//! ARCHITECTURE
//! ============
//! The zone only knows its own address (row id + container). It hands the
//! raw payload to the workbench, which decides whether the drop is valid;
//! rejected drops change nothing and are logged at debug level.

use leptos::ev::DragEvent;
use leptos::prelude::*;
use workbench::row::Container;

use crate::app::Bench;
use crate::util::{dom_id, drag};

#[component]
pub fn DropZone(
    row_id: String,
    container: Container,
    class_name: &'static str,
    children: Children,
) -> impl IntoView {
    let bench = expect_context::<RwSignal<Bench>>();
    let id = dom_id::container(&row_id, container);

    let on_drop = move |ev: DragEvent| {
        let raw = drag::take_payload(&ev);
        bench.update(|b| {
            if let Err(e) = b.drop_token(&raw, &row_id, container) {
                log::debug!("drop on {row_id}/{container} ignored: {e}");
            }
        });
    };

    view! {
        <div id=id class=class_name on:dragover=move |ev: DragEvent| drag::allow_drop(&ev) on:drop=on_drop>
            {children()}
        </div>
    }
}
