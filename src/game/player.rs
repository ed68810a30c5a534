//! Player state management.

use serde::Serialize;

use crate::game::Position;

/// The single player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Current position.
    pub pos: Position,
    /// Current hit points, never above `max_hp` and never below zero.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Number of enemies killed.
    pub kills: u32,
    /// Accumulated score.
    pub score: u32,
}

impl Player {
    /// Create a player at full health.
    #[must_use]
    pub const fn new(pos: Position, max_hp: i32) -> Self {
        Self {
            pos,
            hp: max_hp,
            max_hp,
            kills: 0,
            score: 0,
        }
    }

    /// Whether the player has run out of hit points.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Heal by at most `amount`, capped at `max_hp`.
    ///
    /// Returns the hit points actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.max_hp - self.hp).max(0);
        self.hp += healed;
        healed
    }

    /// Take damage, clamping hit points at zero.
    ///
    /// Returns `true` if this blow killed the player.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        self.hp = self.hp.saturating_sub(damage);
        if self.is_dead() {
            self.hp = 0;
            return true;
        }
        false
    }

    /// Record a kill.
    pub fn add_kill(&mut self) {
        self.kills += 1;
    }

    /// Add to the score.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
