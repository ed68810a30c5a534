//! Game invariants - sanity checks that detect bugs.
//!
//! These should never trigger in a correct simulator. Tests, the fuzz
//! target, and debug builds run them after every turn.

use std::fmt;

use crate::game::GameState;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants<G>(state: &GameState<G>) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let player = &state.player;

    if player.hp > player.max_hp {
        violations.push(InvariantViolation {
            message: format!("Player hp {} exceeds max {}", player.hp, player.max_hp),
        });
    }

    if player.hp < 0 {
        violations.push(InvariantViolation {
            message: format!("Player hp {} is negative", player.hp),
        });
    }

    if state.game_over && player.hp != 0 {
        violations.push(InvariantViolation {
            message: format!("Game over with player hp {}", player.hp),
        });
    }

    if player.is_dead() && !state.game_over {
        violations.push(InvariantViolation {
            message: "Player is dead but the game is still running".to_string(),
        });
    }

    if state.turn > state.config.max_turns {
        violations.push(InvariantViolation {
            message: format!(
                "Turn {} exceeds limit {}",
                state.turn, state.config.max_turns
            ),
        });
    }

    if state.floor.number == 0 {
        violations.push(InvariantViolation {
            message: "Floor number is zero".to_string(),
        });
    }

    for (idx, enemy) in state.floor.enemies.iter().enumerate() {
        if enemy.hp > enemy.max_hp {
            violations.push(InvariantViolation {
                message: format!(
                    "{} #{idx} hp {} exceeds max {}",
                    enemy.kind, enemy.hp, enemy.max_hp
                ),
            });
        }
        // Alive/dead must agree with hit points
        if enemy.is_alive() == (enemy.hp <= 0) {
            violations.push(InvariantViolation {
                message: format!(
                    "{} #{idx} has hp {} but vitality {:?}",
                    enemy.kind, enemy.hp, enemy.vitality
                ),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn test_fresh_game_is_clean() {
        let game = GameState::new(SimConfig::default());
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_overhealed_player_detected() {
        let mut game = GameState::new(SimConfig::default());
        game.player.hp = 25;
        let violations = check_invariants(&game);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("exceeds max"));
    }

    #[test]
    fn test_zombie_enemy_detected() {
        let mut game = GameState::new(SimConfig::default());
        game.floor.enemies[0].hp = 0;
        assert_eq!(check_invariants(&game).len(), 1);
    }

    #[test]
    fn test_unnoticed_death_detected() {
        let mut game = GameState::new(SimConfig::default());
        game.player.hp = 0;
        let violations = check_invariants(&game);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("still running"));
    }

    #[test]
    fn test_turn_overflow_detected() {
        let mut game = GameState::new(SimConfig::default());
        game.turn = 11;
        assert_eq!(check_invariants(&game).len(), 1);
    }
}
