//! Floor items.

use std::fmt;

use serde::Serialize;

use crate::game::Position;

/// Kind of item lying on a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    /// Restores hit points when picked up.
    HealthPotion,
    /// Adds to the score when picked up.
    Gold,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::HealthPotion => write!(f, "Health Potion"),
            ItemKind::Gold => write!(f, "Gold"),
        }
    }
}

/// Whether an item can still be picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    /// Lying on the floor.
    Available,
    /// Already picked up; ignored by pickup logic.
    Collected,
}

/// An item on the current floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Item kind.
    pub kind: ItemKind,
    /// Position on the floor.
    pub pos: Position,
    /// Available or collected.
    pub availability: Availability,
}

impl Item {
    /// Place a new item.
    #[must_use]
    pub const fn new(kind: ItemKind, pos: Position) -> Self {
        Self {
            kind,
            pos,
            availability: Availability::Available,
        }
    }

    /// Whether the item can still be picked up.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.availability, Availability::Available)
    }

    /// Mark the item collected. Returns `false` if it already was.
    pub fn collect(&mut self) -> bool {
        if !self.is_available() {
            return false;
        }
        self.availability = Availability::Collected;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_once() {
        let mut item = Item::new(ItemKind::Gold, Position::new(28, 28));
        assert!(item.is_available());
        assert!(item.collect());
        assert!(!item.is_available());
        assert!(!item.collect());
    }
}
