//! UI Settings
//!
//! Compile-time configuration for the page.

use log::LevelFilter;
use packing_core::Quantity;

/// Console log level
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

/// Quantity preselected in the add form, and restored after each submit
pub const DEFAULT_QUANTITY: Quantity = Quantity::DEFAULT;

/// Form heading
pub const FORM_TITLE: &str = "What do you want to pack today?";

/// Placeholder of the description input
pub const DESCRIPTION_PLACEHOLDER: &str = "Item...";
