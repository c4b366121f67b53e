//! UI Components
//!
//! Presentational pieces of the packing list page.

mod add_item_form;
mod list_actions;
mod packing_item_row;
mod packing_list_view;
mod quantity_selector;
mod stats_footer;

pub use add_item_form::AddItemForm;
pub use list_actions::ListActions;
pub use packing_item_row::PackingItemRow;
pub use packing_list_view::PackingListView;
pub use quantity_selector::QuantitySelector;
pub use stats_footer::StatsFooter;
