//! Scripted driver loop.
//!
//! Provides a pure function interface: `(config, iterations) -> RunResult`.
//! The driver feeds a fixed five-step walk into the simulator, cycling
//! through it until the iteration bound, completion, or player death.

use serde::Serialize;

use crate::config::SimConfig;
use crate::game::{Direction, Event, FinalStats, FloorGenerator, GameState};

/// The walk fed to the simulator, repeated cyclically.
pub const SCRIPT: [Direction; 5] = [
    Direction::RIGHT,
    Direction::DOWN,
    Direction::LEFT,
    Direction::UP,
    Direction::DOWN_RIGHT,
];

/// Default iteration bound for the driver.
pub const DEFAULT_ITERATIONS: u32 = 20;

/// How a scripted run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The simulator hit its turn limit.
    TurnLimit,
    /// The player died.
    PlayerDied,
    /// The driver ran out of iterations first.
    IterationsExhausted,
}

/// Result of a scripted run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Every event in order, starting with initialization.
    pub events: Vec<Event>,
    /// Driver iterations that reached the simulator.
    pub iterations: u32,
    /// Simulator turn counter at the end.
    pub turns_played: u32,
    /// Floor the run ended on.
    pub floor: u32,
    /// Why the run stopped.
    pub stop_reason: StopReason,
    /// Summary of the run.
    pub stats: FinalStats,
}

/// Direction used on driver iteration `i`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn direction_for(i: u32) -> Direction {
    SCRIPT[i as usize % SCRIPT.len()]
}

/// Initialize `state` and drive it with the script for up to `iterations`.
pub fn drive<G: FloorGenerator>(state: &mut GameState<G>, iterations: u32) -> RunResult {
    let mut events = state.initialize();
    let mut performed = 0;

    for i in 0..iterations {
        let turn = state.advance_turn(direction_for(i));
        performed += 1;
        events.extend(turn.events);
        if turn.finished || state.game_over {
            break;
        }
    }

    let stop_reason = if state.game_over {
        StopReason::PlayerDied
    } else if state.turn() >= state.config.max_turns {
        StopReason::TurnLimit
    } else {
        StopReason::IterationsExhausted
    };

    log::info!("scripted run stopped after {performed} iterations ({stop_reason:?})");

    RunResult {
        events,
        iterations: performed,
        turns_played: state.turn(),
        floor: state.floor_number(),
        stop_reason,
        stats: state.final_stats(),
    }
}

/// Run the stock harness with `config`.
#[must_use]
pub fn run_script(config: SimConfig, iterations: u32) -> RunResult {
    let mut state = GameState::new(config);
    drive(&mut state, iterations)
}
