//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use packing_core::{IdGenerator, PackingList};
use reactive_stores::Store;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current packing list, in display order
    pub list: PackingList,
    /// Id source for newly added items
    pub ids: IdGenerator,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with the result of a transition on the current one
pub fn store_apply(store: &AppStore, transition: impl FnOnce(&PackingList) -> PackingList) {
    let next = transition(&store.list().read_untracked());
    *store.list().write() = next;
}

/// Reserve a fresh item id
pub fn store_next_id(store: &AppStore) -> packing_core::ItemId {
    store.ids().write().next_id()
}
