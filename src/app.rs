//! Packing List App
//!
//! Main application component: form, list and stats stacked on one page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, ListActions, PackingListView, StatsFooter};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide store and actions to all children
    provide_context(store);
    provide_context(AppContext::new(store));

    log::info!("[APP] Started with an empty list");

    view! {
        <div class="app-layout">
            <AddItemForm />
            <PackingListView />
            <ListActions />
            <StatsFooter />
        </div>
    }
}
