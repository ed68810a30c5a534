//! Game layer for Depths.
//!
//! Implements the turn rules of the harness:
//! - Player with hit points, kills and score
//! - Enemies that chase or strike depending on distance
//! - Items (potions, gold) picked up on contact
//! - Floors produced by a pluggable generator
//! - Turn resolution producing an ordered event list

mod combat;
mod enemy;
mod event;
mod floor;
mod invariants;
mod item;
mod player;
mod position;
mod state;

pub use combat::{blow_damage, MeleeResult, MIN_DAMAGE};
pub use enemy::{Enemy, EnemyKind, EnemyStats, Vitality};
pub use event::{Event, FinalStats};
pub use floor::{FixedFloorGenerator, Floor, FloorGenerator};
pub use invariants::{check_invariants, InvariantViolation};
pub use item::{Availability, Item, ItemKind};
pub use player::Player;
pub use position::{Direction, Position};
pub use state::{GameState, Turn};
