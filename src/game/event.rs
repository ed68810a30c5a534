//! Events produced by turn resolution.
//!
//! The simulator never prints; it returns these in the order they happened
//! and leaves presentation to [`crate::render`].

use serde::Serialize;

use crate::game::{EnemyKind, ItemKind, Position};

/// End-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalStats {
    /// Floors left behind (`floor - 1`).
    pub floors_cleared: u32,
    /// Enemies killed.
    pub kills: u32,
    /// Player hit points at the end.
    pub hp: i32,
    /// Player maximum hit points.
    pub max_hp: i32,
    /// Final score.
    pub score: u32,
    /// Whether the run ended in the player's death.
    pub game_over: bool,
}

/// One observable state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The simulator was initialized on its first floor.
    GameStarted {
        /// Starting floor.
        floor: u32,
        /// Player hit points.
        hp: i32,
        /// Player maximum hit points.
        max_hp: i32,
    },
    /// A turn began; the player tries to step onto `destination`.
    TurnStarted {
        /// 1-based turn number.
        turn: u32,
        /// Target tile.
        destination: Position,
    },
    /// The player struck an enemy instead of moving.
    PlayerAttacked {
        /// Enemy struck.
        enemy: EnemyKind,
        /// Damage dealt.
        damage: i32,
        /// Enemy hit points after the blow.
        hp: i32,
        /// Enemy maximum hit points.
        max_hp: i32,
    },
    /// An enemy died.
    EnemyKilled {
        /// Enemy killed.
        enemy: EnemyKind,
        /// Player kill count after this kill.
        kills: u32,
    },
    /// The player picked up an item.
    ItemPickedUp {
        /// Item picked up.
        item: ItemKind,
    },
    /// A potion restored hit points.
    Healed {
        /// Hit points restored.
        amount: i32,
        /// Player hit points after healing.
        hp: i32,
        /// Player maximum hit points.
        max_hp: i32,
    },
    /// Gold was added to the score.
    GoldCollected {
        /// Points gained.
        amount: u32,
        /// Score afterwards.
        score: u32,
    },
    /// An enemy hit the player.
    EnemyAttacked {
        /// Attacking enemy.
        enemy: EnemyKind,
        /// Damage dealt.
        damage: i32,
        /// Player hit points after the blow.
        hp: i32,
        /// Player maximum hit points.
        max_hp: i32,
    },
    /// An enemy stepped toward the player.
    EnemyMoved {
        /// Moving enemy.
        enemy: EnemyKind,
        /// New position.
        to: Position,
    },
    /// The player's hit points reached zero.
    PlayerDied,
    /// The player reached the stairs.
    FloorAdvanced {
        /// New floor number.
        floor: u32,
    },
    /// The turn limit was reached.
    SimulationCompleted,
    /// Summary emitted once when the run ends.
    FinalStats(FinalStats),
}
