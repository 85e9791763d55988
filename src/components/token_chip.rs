//! A single draggable function token.

use leptos::ev::DragEvent;
use leptos::prelude::*;
use workbench::payload::DragPayload;
use workbench::row::Container;
use workbench::token::Token;

use crate::util::{dom_id, drag};

#[component]
pub fn TokenChip(row_id: String, container: Container, token: Token) -> impl IntoView {
    let id = dom_id::token(&row_id, container, token);
    let payload = DragPayload::new(row_id, container, token);

    view! {
        <span
            id=id
            class=format!("token-chip token-chip--{token}")
            draggable="true"
            on:dragstart=move |ev: DragEvent| drag::start(&ev, &payload)
        >
            {token.as_str()}
        </span>
    }
}
