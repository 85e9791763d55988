//! Drag-and-drop event glue.
//!
//! Carries a [`DragPayload`] through the native `DataTransfer` channel as
//! plain text. Requires a browser environment; the non-browser build keeps
//! the same call surface with no effect.

use leptos::ev::DragEvent;
use workbench::payload::DragPayload;

#[cfg(feature = "csr")]
const DRAG_FORMAT: &str = "text/plain";

/// Attach `payload` to a starting drag.
pub fn start(ev: &DragEvent, payload: &DragPayload) {
    #[cfg(feature = "csr")]
    {
        let Some(transfer) = ev.data_transfer() else {
            return;
        };
        if let Err(e) = transfer.set_data(DRAG_FORMAT, &payload.to_string()) {
            log::warn!("drag: failed to set payload {payload}: {e:?}");
        }
        transfer.set_effect_allowed("move");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, payload);
    }
}

/// Mark a container as a valid drop target. No state effect.
pub fn allow_drop(ev: &DragEvent) {
    ev.prevent_default();
}

/// Finish a drop and return the raw payload; empty when none was carried.
pub fn take_payload(ev: &DragEvent) -> String {
    ev.prevent_default();
    #[cfg(feature = "csr")]
    {
        ev.data_transfer()
            .and_then(|transfer| transfer.get_data(DRAG_FORMAT).ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
