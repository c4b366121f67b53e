//! Packing List View Component
//!
//! One row per item, in insertion order.

use leptos::prelude::*;

use crate::components::PackingItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PackingListView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="packing-list">
            // packed is part of the key so a toggled row re-renders
            <For
                each=move || store.list().read().items().to_vec()
                key=|item| (item.id, item.packed)
                children=move |item| view! { <PackingItemRow item=item /> }
            />
        </ul>
    }
}
