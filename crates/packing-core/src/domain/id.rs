//! Item identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a packing item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source for one session.
///
/// Ids start at 1 and never repeat, however fast items are added.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next unused id
    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }

    /// Make sure every id handed out from now on is greater than `seen`.
    ///
    /// Used when items with externally chosen ids (the sample list) enter the collection.
    pub fn skip_past(&mut self, seen: ItemId) {
        self.next = self.next.max(seen.0 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert_eq!(a, ItemId::new(1));
        assert!(a < b && b < c);
    }

    #[test]
    fn test_skip_past() {
        let mut ids = IdGenerator::new();
        ids.skip_past(ItemId::new(4));
        assert_eq!(ids.next_id(), ItemId::new(5));

        // Never moves backwards
        ids.skip_past(ItemId::new(2));
        assert_eq!(ids.next_id(), ItemId::new(6));
    }
}
