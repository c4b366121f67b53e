//! Quantity Selector Component
//!
//! Dropdown over every allowed quantity.

use leptos::prelude::*;
use packing_core::Quantity;
use wasm_bindgen::JsCast;

/// Parse a `<select>` value back into a quantity
pub fn parse_quantity(value: &str) -> Option<Quantity> {
    value.trim().parse::<u32>().ok().and_then(|n| Quantity::new(n).ok())
}

#[component]
pub fn QuantitySelector(
    current: ReadSignal<Quantity>,
    on_change: impl Fn(Quantity) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="quantity-select"
            on:change=move |ev| {
                let Some(select) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) else {
                    return;
                };
                match parse_quantity(&select.value()) {
                    Some(quantity) => on_change(quantity),
                    None => log::warn!("[FORM] Ignoring quantity {:?}", select.value()),
                }
            }
        >
            {Quantity::all().map(|quantity| {
                let value = quantity.to_string();
                view! {
                    <option value=value.clone() prop:selected=move || current.get() == quantity>
                        {value.clone()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("4"), Quantity::new(4).ok());
        assert_eq!(parse_quantity("20"), Some(Quantity::MAX));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("21"), None);
        assert_eq!(parse_quantity("two"), None);
    }
}
