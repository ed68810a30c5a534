//! Plain-text rendering of simulator events.
//!
//! Output format:
//! ```text
//! Initializing Depths of Ruin test...
//! Game started on floor 1
//! Player HP: 20/20
//! Turn 1: Moving to (31, 30)
//! Slime moves to (34, 30)
//! ...
//! === FINAL STATS ===
//! Floors cleared: 1
//! ...
//! ==================
//! ```

#![allow(clippy::format_push_string)]

use crate::game::{Event, FinalStats};

/// Render one event as one or more lines (without trailing newline).
#[must_use]
pub fn render_event(event: &Event) -> String {
    match *event {
        Event::GameStarted { floor, hp, max_hp } => format!(
            "Initializing Depths of Ruin test...\nGame started on floor {floor}\nPlayer HP: {hp}/{max_hp}"
        ),
        Event::TurnStarted { turn, destination } => {
            format!("Turn {turn}: Moving to {destination}")
        }
        Event::PlayerAttacked {
            enemy,
            damage,
            hp,
            max_hp,
        } => format!("Attacking {enemy}!\n{enemy} takes {damage} damage (HP: {hp}/{max_hp})"),
        Event::EnemyKilled { enemy, kills } => {
            format!("Killed {enemy}! Kill count: {kills}")
        }
        Event::ItemPickedUp { item } => format!("Picked up {item}!"),
        Event::Healed { amount, hp, max_hp } => {
            format!("Healed {amount} HP (now {hp}/{max_hp})")
        }
        Event::GoldCollected { amount, score } => {
            format!("Got {amount} gold! Score: {score}")
        }
        Event::EnemyAttacked {
            enemy,
            damage,
            hp,
            max_hp,
        } => format!("{enemy} attacks for {damage} damage! Player HP: {hp}/{max_hp}"),
        Event::EnemyMoved { enemy, to } => format!("{enemy} moves to {to}"),
        Event::PlayerDied => "Player died! Game over.".to_string(),
        Event::FloorAdvanced { floor } => {
            format!("Reached stairs! Advancing to floor {floor}")
        }
        Event::SimulationCompleted => "Test completed successfully!".to_string(),
        Event::FinalStats(stats) => render_stats(&stats),
    }
}

/// Render the final stats block.
#[must_use]
pub fn render_stats(stats: &FinalStats) -> String {
    let mut output = String::from("\n=== FINAL STATS ===\n");
    output.push_str(&format!("Floors cleared: {}\n", stats.floors_cleared));
    output.push_str(&format!("Enemies killed: {}\n", stats.kills));
    output.push_str(&format!("Final HP: {}/{}\n", stats.hp, stats.max_hp));
    output.push_str(&format!("Score: {}\n", stats.score));
    output.push_str(&format!("Game over: {}\n", stats.game_over));
    output.push_str("==================\n");
    output
}

/// Render a whole event log, one event per line group.
#[must_use]
pub fn render_events(events: &[Event]) -> String {
    let mut output = String::new();
    for event in events {
        output.push_str(&render_event(event));
        output.push('\n');
    }
    output
}
