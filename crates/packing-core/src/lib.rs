//! Packing List Core
//!
//! Domain layer for the packing list page:
//! - domain: items, quantities, ids and errors
//! - list: the ordered item collection and its transitions
//! - stats: derived packing progress

pub mod domain;
mod list;
mod stats;


pub use domain::{DomainError, DomainResult, Entity, IdGenerator, Item, ItemId, Quantity};
pub use list::PackingList;
pub use stats::{compute_stats, PackingStats, StatsMessage};
