//! List Actions Component
//!
//! Buttons acting on the whole list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListActions() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let is_empty = move || store.list().read().is_empty();

    view! {
        <div class="list-actions">
            <button type="button" on:click=move |_| ctx.load_sample()>"Load sample list"</button>
            <button type="button" disabled=is_empty on:click=move |_| ctx.clear()>"Clear list"</button>
        </div>
    }
}
