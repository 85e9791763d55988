//! Root application component and workbench context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use workbench::config::BoardConfig;
use workbench::engine::Workbench;

use crate::components::{row_block::RowBlock, toolbar::Toolbar};
use crate::util::storage::LocalStorageStore;

/// The workbench as the UI holds it: history persisted to `localStorage`.
pub type Bench = Workbench<LocalStorageStore>;

/// Open the workbench with build-time config, falling back to defaults.
pub fn open_bench() -> Bench {
    let config = BoardConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("invalid build config, using defaults: {e}");
        BoardConfig::default()
    });
    log::info!(
        "workbench: storage_key={} slots_per_row={} history_limit={:?}",
        config.storage_key,
        config.slots_per_row,
        config.history_limit
    );
    let store = LocalStorageStore::new(config.storage_key.clone());
    Workbench::open(store, config)
}

/// Root application component.
///
/// Provides the workbench signal to the toolbar and every row block.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bench = RwSignal::new(open_bench());
    provide_context(bench);

    let rows = move || bench.with(|b| b.snapshot().rows.clone());

    view! {
        <Title text="Function Slots"/>

        <main class="workbench">
            <Toolbar/>
            <div class="workbench__rows">
                {move || rows().into_iter().map(|row| view! { <RowBlock row/> }).collect_view()}
            </div>
        </main>
    }
}
