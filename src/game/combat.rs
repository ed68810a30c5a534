//! Combat resolution.
//!
//! Both directions of combat use the same subtraction model: attack minus
//! defense, with every landed blow dealing at least one point.

/// Minimum damage any blow deals.
pub const MIN_DAMAGE: i32 = 1;

/// Damage dealt by an attacker with `attack` against a defender with `defense`.
///
/// Always at least [`MIN_DAMAGE`].
#[must_use]
pub const fn blow_damage(attack: i32, defense: i32) -> i32 {
    let raw = attack.saturating_sub(defense);
    if raw < MIN_DAMAGE { MIN_DAMAGE } else { raw }
}

/// Result of the player's melee attack on an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeleeResult {
    /// Damage dealt.
    pub damage: i32,
    /// Enemy hit points after the blow.
    pub remaining_hp: i32,
    /// Whether the blow killed the enemy.
    pub killed: bool,
}

/// Kani formal verification proofs.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Prove every blow deals at least one point of damage.
    #[kani::proof]
    fn prove_blow_damage_positive() {
        let attack: i32 = kani::any();
        let defense: i32 = kani::any();
        assert!(blow_damage(attack, defense) >= MIN_DAMAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_vs_slime() {
        // Player attack 3 vs slime defense 0
        assert_eq!(blow_damage(3, 0), 3);
    }

    #[test]
    fn test_player_vs_skeleton() {
        assert_eq!(blow_damage(3, 1), 2);
    }

    #[test]
    fn test_enemy_vs_player() {
        // Slime attack 2, skeleton attack 3, player defense 1
        assert_eq!(blow_damage(2, 1), 1);
        assert_eq!(blow_damage(3, 1), 2);
    }

    #[test]
    fn test_minimum_damage() {
        assert_eq!(blow_damage(0, 5), 1);
        assert_eq!(blow_damage(1, 1), 1);
        assert_eq!(blow_damage(i32::MIN, i32::MAX), 1);
    }
}
