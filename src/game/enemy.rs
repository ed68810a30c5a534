//! Enemies and their stat table.

use std::fmt;

use serde::Serialize;

use crate::game::Position;

/// Kind of enemy. Determines starting stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnemyKind {
    /// Weak enemy present on every floor.
    Slime,
    /// Tougher enemy from floor 3 onward.
    Skeleton,
}

/// Base stats for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStats {
    /// Starting (and maximum) hit points.
    pub max_hp: i32,
    /// Attack value.
    pub attack: i32,
    /// Defense value.
    pub defense: i32,
}

impl EnemyKind {
    /// Base stats for this kind.
    #[must_use]
    pub const fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Slime => EnemyStats {
                max_hp: 5,
                attack: 2,
                defense: 0,
            },
            EnemyKind::Skeleton => EnemyStats {
                max_hp: 8,
                attack: 3,
                defense: 1,
            },
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnemyKind::Slime => write!(f, "Slime"),
            EnemyKind::Skeleton => write!(f, "Skeleton"),
        }
    }
}

/// Whether an enemy still takes part in the game.
///
/// Dead enemies stay in the floor's collection so indices remain stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vitality {
    /// Still acting.
    Alive,
    /// Killed; ignored by all further interaction.
    Dead,
}

/// A single enemy on the current floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enemy {
    /// Enemy kind.
    pub kind: EnemyKind,
    /// Current position.
    pub pos: Position,
    /// Current hit points. May go negative on the killing blow.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Attack value.
    pub attack: i32,
    /// Defense value.
    pub defense: i32,
    /// Alive or dead.
    pub vitality: Vitality,
}

impl Enemy {
    /// Spawn a fresh enemy of `kind` at `pos`.
    #[must_use]
    pub const fn spawn(kind: EnemyKind, pos: Position) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            pos,
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            attack: stats.attack,
            defense: stats.defense,
            vitality: Vitality::Alive,
        }
    }

    /// Whether the enemy is still alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        matches!(self.vitality, Vitality::Alive)
    }

    /// Subtract damage.
    ///
    /// Returns `true` if this blow took the enemy from alive to dead. Dead
    /// enemies are left untouched.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.hp -= damage;
        if self.hp <= 0 {
            self.vitality = Vitality::Dead;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_uses_stat_table() {
        let slime = Enemy::spawn(EnemyKind::Slime, Position::new(35, 30));
        assert_eq!(slime.hp, 5);
        assert_eq!(slime.max_hp, 5);
        assert_eq!(slime.attack, 2);
        assert_eq!(slime.defense, 0);
        assert!(slime.is_alive());

        let skeleton = Enemy::spawn(EnemyKind::Skeleton, Position::new(25, 35));
        assert_eq!(skeleton.hp, 8);
        assert_eq!(skeleton.attack, 3);
        assert_eq!(skeleton.defense, 1);
    }

    #[test]
    fn test_killing_blow_marks_dead_once() {
        let mut slime = Enemy::spawn(EnemyKind::Slime, Position::default());
        assert!(!slime.take_damage(3));
        assert_eq!(slime.hp, 2);
        assert!(slime.take_damage(3));
        assert_eq!(slime.hp, -1);
        assert_eq!(slime.vitality, Vitality::Dead);

        // Further blows do nothing
        assert!(!slime.take_damage(3));
        assert_eq!(slime.hp, -1);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EnemyKind::Slime.to_string(), "Slime");
        assert_eq!(EnemyKind::Skeleton.to_string(), "Skeleton");
    }
}
