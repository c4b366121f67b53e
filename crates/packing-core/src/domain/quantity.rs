//! Quantity Value
//!
//! How many of an item to pack, restricted to the selector range 1..=20.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: Quantity = Quantity(1);
    pub const MAX: Quantity = Quantity(20);
    /// Preselected value of the add form
    pub const DEFAULT: Quantity = Quantity(2);

    pub fn new(value: u32) -> DomainResult<Self> {
        if (Self::MIN.0 as u32..=Self::MAX.0 as u32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::QuantityOutOfRange(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every selectable quantity, ascending
    pub fn all() -> impl Iterator<Item = Quantity> {
        (Self::MIN.0..=Self::MAX.0).map(Quantity)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.0 as u32
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
