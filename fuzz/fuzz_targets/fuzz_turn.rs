#![no_main]

//! Turn resolution fuzzer.
//!
//! Drives the simulator with arbitrary configs and walks and checks the
//! game invariants after every turn.

use arbitrary::Arbitrary;
use depths::game::{check_invariants, Direction, GameState};
use depths::SimConfig;
use libfuzzer_sys::fuzz_target;

/// Structured input for turn fuzzing.
#[derive(Arbitrary, Debug)]
struct TurnInput {
    /// Turn limit.
    max_turns: u8,
    /// Stairs trigger turn.
    stairs_turn: u8,
    /// Starting player hit points.
    player_max_hp: u8,
    /// Player attack.
    player_attack: u8,
    /// Player defense.
    player_defense: u8,
    /// Walk as (dx, dy) pairs. Components at the `i32` extremes are kept,
    /// everything else is folded into -1..=1.
    walk: Vec<(i32, i32)>,
}

fn fold(component: i32) -> i32 {
    match component {
        i32::MIN | i32::MAX => component,
        _ => component.signum(),
    }
}

fuzz_target!(|input: TurnInput| {
    let config = SimConfig {
        max_turns: u32::from(input.max_turns).max(1),
        stairs_turn: u32::from(input.stairs_turn),
        player_max_hp: i32::from(input.player_max_hp).max(1),
        player_attack: i32::from(input.player_attack),
        player_defense: i32::from(input.player_defense),
        ..SimConfig::default()
    };

    let mut game = GameState::new(config);
    game.initialize();

    for (dx, dy) in input.walk.into_iter().take(300) {
        let dir = Direction::new(fold(dx), fold(dy));
        let was_over = game.game_over;
        let before = (game.player, game.floor.clone(), game.turn());

        let turn = game.advance_turn(dir);

        if was_over {
            assert!(turn.events.is_empty());
            assert_eq!((game.player, game.floor.clone(), game.turn()), before);
        }

        let violations = check_invariants(&game);
        assert!(violations.is_empty(), "{violations:?}");
    }
});
