//! Floor contents and floor generation.
//!
//! Generation is a strategy behind [`FloorGenerator`]. The stock
//! [`FixedFloorGenerator`] places hand-picked fixtures relative to the floor
//! center and never consults its RNG.

use rand::RngCore;
use serde::Serialize;

use crate::game::{Enemy, EnemyKind, Item, ItemKind, Position};

/// Everything that belongs to one floor. Replaced wholesale on each
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Floor {
    /// Floor number, starting at 1.
    pub number: u32,
    /// Where the player is placed on arrival.
    pub entry: Position,
    /// Enemies in spawn order. Dead ones are kept.
    pub enemies: Vec<Enemy>,
    /// Items in placement order. Collected ones are kept.
    pub items: Vec<Item>,
}

impl Floor {
    /// Index of the living enemy standing on `pos`, if any.
    #[must_use]
    pub fn living_enemy_at(&self, pos: Position) -> Option<usize> {
        self.enemies
            .iter()
            .position(|e| e.is_alive() && e.pos == pos)
    }

    /// Index of the first available item lying on `pos`, if any.
    #[must_use]
    pub fn available_item_at(&self, pos: Position) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i.is_available() && i.pos == pos)
    }

    /// Number of enemies still alive.
    #[must_use]
    pub fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }
}

/// Produces the contents of a floor.
pub trait FloorGenerator {
    /// Build floor number `floor` (1-based).
    fn generate(&self, floor: u32, rng: &mut dyn RngCore) -> Floor;
}

/// Deterministic fixtures keyed only on the floor number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFloorGenerator {
    center: Position,
}

impl FixedFloorGenerator {
    /// First floor that spawns a skeleton.
    pub const SKELETON_FLOOR: u32 = 3;

    /// Create a generator that lays floors out around `center`.
    #[must_use]
    pub const fn new(center: Position) -> Self {
        Self { center }
    }

    fn at(self, dx: i32, dy: i32) -> Position {
        Position::new(
            self.center.x.saturating_add(dx),
            self.center.y.saturating_add(dy),
        )
    }
}

impl FloorGenerator for FixedFloorGenerator {
    fn generate(&self, floor: u32, _rng: &mut dyn RngCore) -> Floor {
        let mut enemies = Vec::with_capacity(2);
        if floor >= 1 {
            enemies.push(Enemy::spawn(EnemyKind::Slime, self.at(5, 0)));
        }
        if floor >= Self::SKELETON_FLOOR {
            enemies.push(Enemy::spawn(EnemyKind::Skeleton, self.at(-5, 5)));
        }

        let items = vec![
            Item::new(ItemKind::HealthPotion, self.at(2, 2)),
            Item::new(ItemKind::Gold, self.at(-2, -2)),
        ];

        Floor {
            number: floor,
            entry: self.center,
            enemies,
            items,
        }
    }
}
