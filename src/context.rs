//! Application Context
//!
//! List actions provided to components via Leptos Context API.

use leptos::prelude::*;
use packing_core::{DomainResult, Item, ItemId, PackingList, Quantity};

use crate::store::{store_apply, store_next_id, AppStateStoreFields, AppStore};

/// Handle through which components change the list
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Build an unpacked item with a fresh id and append it.
    ///
    /// A blank description is rejected before an id is taken.
    pub fn add_item(&self, description: String, quantity: Quantity) -> DomainResult<Item> {
        Item::check_description(&description)?;
        let item = Item::new(store_next_id(&self.store), description, quantity);
        let added = item.clone();
        store_apply(&self.store, move |list| list.add_item(item));
        Ok(added)
    }

    pub fn delete_item(&self, id: ItemId) {
        store_apply(&self.store, |list| list.delete_item(id));
    }

    pub fn toggle_item(&self, id: ItemId) {
        store_apply(&self.store, |list| list.toggle_item(id));
    }

    /// Replace the list with the demo items
    pub fn load_sample(&self) {
        let sample = PackingList::sample();
        if let Some(max) = sample.max_id() {
            self.store.ids().write().skip_past(max);
        }
        log::info!("[APP] Loaded sample list with {} items", sample.len());
        store_apply(&self.store, move |_| sample);
    }

    pub fn clear(&self) {
        store_apply(&self.store, PackingList::clear);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
