// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Depths: a deterministic turn-resolution harness for a roguelike.
//!
//! This crate fabricates a tiny dungeon (player, enemies, items on one
//! floor), drives it with a scripted walk, and reports every state
//! transition as an event:
//! - Bump-to-attack melee and distance-based enemy reactions
//! - Item pickup (healing potions, gold)
//! - Scripted stairs that regenerate the floor
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI / Scripted driver (script)    │
//! ├─────────────────────────────────────┤
//! │   Turn resolution (game) → events   │
//! ├─────────────────────────────────────┤
//! │   Event rendering (render)          │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod script;

pub use config::{Config, ScriptConfig, SimConfig};
pub use error::ConfigError;

// Re-export key game types at crate root for convenience
pub use game::{Direction, Event, FinalStats, GameState, Position, Turn};
pub use script::{run_script, RunResult, StopReason};
