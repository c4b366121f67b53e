//! Domain Layer
//!
//! Contains the packing item entity and its value types.
//! This layer has NO browser dependencies.

mod entity;
mod id;
mod item;
mod quantity;

pub use entity::{DomainError, DomainResult, Entity};
pub use id::{IdGenerator, ItemId};
pub use item::Item;
pub use quantity::Quantity;
