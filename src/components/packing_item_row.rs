//! Packing Item Row Component

use leptos::prelude::*;
use packing_core::Item;

use crate::context::use_app_context;

/// A single item: packed checkbox, label and delete button
#[component]
pub fn PackingItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let packed = item.packed;
    let label = item.label();

    view! {
        <li class=if packed { "item-row packed" } else { "item-row" }>
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| ctx.toggle_item(id)
            />
            <span style=if packed { "text-decoration: line-through;" } else { "" }>
                {label}
            </span>
            <button class="delete-btn" on:click=move |_| ctx.delete_item(id)>"❌"</button>
        </li>
    }
}
