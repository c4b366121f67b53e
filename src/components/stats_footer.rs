//! Stats Footer Component
//!
//! Progress sentence, or the completion message once everything is packed.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.list().read().stats());

    view! {
        <footer class=move || if stats.get().all_packed { "stats complete" } else { "stats" }>
            <p>{move || stats.get().message().to_string()}</p>
        </footer>
    }
}
