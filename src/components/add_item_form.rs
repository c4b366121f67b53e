//! Add Item Form Component
//!
//! Quantity selector and description input for new items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::QuantitySelector;
use crate::context::use_app_context;
use crate::settings::{DEFAULT_QUANTITY, DESCRIPTION_PLACEHOLDER, FORM_TITLE};

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.add_item(description.get(), quantity.get()) {
            Ok(item) => {
                log::debug!("[FORM] Added {} {}", item.id, item.label());
                set_description.set(String::new());
                set_quantity.set(DEFAULT_QUANTITY);
            }
            Err(e) => log::warn!("[FORM] Rejected: {}", e),
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>{FORM_TITLE}</h3>
            <QuantitySelector
                current=quantity
                on_change=move |q| set_quantity.set(q)
            />
            <input
                type="text"
                placeholder=DESCRIPTION_PLACEHOLDER
                prop:value=move || description.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_description.set(input.value());
                    }
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
