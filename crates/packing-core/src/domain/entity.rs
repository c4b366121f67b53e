//! Domain Layer - Core Entity Trait
//!
//! Basic contract shared by domain entities, plus the domain error type.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid input: description must not be empty")]
    EmptyDescription,
    #[error("Invalid input: quantity {0} is outside {min}..={max}", min = super::Quantity::MIN.get(), max = super::Quantity::MAX.get())]
    QuantityOutOfRange(u32),
}
