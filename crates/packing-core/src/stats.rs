//! Packing Progress
//!
//! Aggregate figures derived from a collection, and the sentence shown for them.

use std::fmt;

use crate::domain::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackingStats {
    pub total: usize,
    pub packed_count: usize,
    /// Rounded half-up; 0 for an empty list
    pub packed_percentage: u8,
    /// Set once the rounded percentage reaches 100
    pub all_packed: bool,
}

/// Count items and packed items and derive the percentage
pub fn compute_stats(items: &[Item]) -> PackingStats {
    let total = items.len();
    let packed_count = items.iter().filter(|item| item.packed).count();
    let packed_percentage = percentage(packed_count, total);
    PackingStats {
        total,
        packed_count,
        packed_percentage,
        all_packed: total > 0 && packed_percentage == 100,
    }
}

fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // part <= total, so the result is at most 100
    ((part * 100 + total / 2) / total) as u8
}

impl PackingStats {
    pub fn message(&self) -> StatsMessage {
        if self.total == 0 {
            StatsMessage::Empty
        } else if self.all_packed {
            StatsMessage::Complete
        } else {
            StatsMessage::Progress {
                total: self.total,
                packed: self.packed_count,
                percentage: self.packed_percentage,
            }
        }
    }
}

/// What the stats footer says
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMessage {
    Empty,
    Progress { total: usize, packed: usize, percentage: u8 },
    Complete,
}

impl fmt::Display for StatsMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsMessage::Empty => write!(f, "Start adding some items to your packing list 🚀"),
            StatsMessage::Progress { total, packed, percentage } => write!(
                f,
                "You have {} items on your list, and you have already packed {} ({}%)",
                total, packed, percentage
            ),
            StatsMessage::Complete => write!(f, "You got everything! Ready to go 🏝️"),
        }
    }
}
