//! Item Entity
//!
//! A single packing list entry.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::{ItemId, Quantity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: Quantity,
    pub packed: bool,
}

impl Item {
    /// Create a new unpacked item.
    ///
    /// Accepts any description, including an empty one.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Create a new unpacked item, rejecting a blank description
    pub fn validated(id: ItemId, description: impl Into<String>, quantity: Quantity) -> DomainResult<Self> {
        let description = description.into();
        Self::check_description(&description)?;
        Ok(Self::new(id, description, quantity))
    }

    /// Reject a description that is empty or only whitespace
    pub fn check_description(description: &str) -> DomainResult<()> {
        if description.trim().is_empty() {
            return Err(DomainError::EmptyDescription);
        }
        Ok(())
    }

    /// Copy of this item with the packed flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }

    /// Row label, e.g. "2 passports"
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_item_creation() {
        let item = Item::new(ItemId::new(1), "passports", qty(2));
        assert_eq!(item.id(), ItemId::new(1));
        assert_eq!(item.description, "passports");
        assert!(!item.packed);
        assert_eq!(item.label(), "2 passports");
    }

    #[test]
    fn test_new_accepts_empty_description() {
        let item = Item::new(ItemId::new(1), "", qty(1));
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_validated_rejects_blank() {
        assert_eq!(
            Item::validated(ItemId::new(1), "   ", qty(1)),
            Err(DomainError::EmptyDescription)
        );
        assert!(Item::validated(ItemId::new(1), "socks", qty(4)).is_ok());
    }

    #[test]
    fn test_check_description() {
        assert_eq!(Item::check_description(""), Err(DomainError::EmptyDescription));
        assert_eq!(Item::check_description(" \t"), Err(DomainError::EmptyDescription));
        assert_eq!(Item::check_description("passports"), Ok(()));
    }

    #[test]
    fn test_toggled_only_flips_packed() {
        let item = Item::new(ItemId::new(3), "shirts", qty(2));
        let packed = item.toggled();
        assert!(packed.packed);
        assert_eq!(packed.id, item.id);
        assert_eq!(packed.description, item.description);
        assert_eq!(packed.quantity, item.quantity);
        assert_eq!(packed.toggled(), item);
    }

    #[test]
    fn test_item_serialization() {
        let item = Item::new(ItemId::new(7), "towels", qty(4));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "description": "towels", "quantity": 4, "packed": false })
        );
    }
}
