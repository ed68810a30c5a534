//! Harness configuration.
//!
//! Every fixed number the harness runs with lives here, with defaults that
//! reproduce the stock smoke test. A TOML file may override any subset:
//!
//! ```toml
//! [simulation]
//! max_turns = 15
//! stairs_turn = 5
//! seed = 7
//!
//! [script]
//! iterations = 20
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::Position;

/// Rules and constants for the turn simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Turns after which the run completes.
    pub max_turns: u32,
    /// Turn counter value at which the player reaches the stairs.
    pub stairs_turn: u32,
    /// Player hit points at the start (and the cap for healing).
    pub player_max_hp: i32,
    /// Player base attack used for melee damage.
    pub player_attack: i32,
    /// Player base defense subtracted from enemy attacks.
    pub player_defense: i32,
    /// Maximum hit points restored by one health potion.
    pub potion_heal: i32,
    /// Score awarded per gold pickup.
    pub gold_value: u32,
    /// Manhattan distance within which enemies chase the player.
    pub chase_radius: u32,
    /// Seed for the floor generator's RNG.
    pub seed: u64,
    /// Where the player is placed on every new floor.
    pub floor_center: Position,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_turns: 10,
            stairs_turn: 5,
            player_max_hp: 20,
            player_attack: 3,
            player_defense: 1,
            potion_heal: 8,
            gold_value: 10,
            chase_radius: 5,
            seed: 0,
            floor_center: Position::new(30, 30),
        }
    }
}

impl SimConfig {
    /// Check that the values describe a runnable simulation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::invalid("max_turns", "must be at least 1"));
        }
        if self.player_max_hp <= 0 {
            return Err(ConfigError::invalid(
                "player_max_hp",
                format!("must be positive, got {}", self.player_max_hp),
            ));
        }
        if self.player_attack < 0 {
            return Err(ConfigError::invalid(
                "player_attack",
                format!("must not be negative, got {}", self.player_attack),
            ));
        }
        if self.player_defense < 0 {
            return Err(ConfigError::invalid(
                "player_defense",
                format!("must not be negative, got {}", self.player_defense),
            ));
        }
        if self.potion_heal < 0 {
            return Err(ConfigError::invalid(
                "potion_heal",
                format!("must not be negative, got {}", self.potion_heal),
            ));
        }
        Ok(())
    }
}

/// Settings for the scripted driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Upper bound on driver iterations.
    pub iterations: u32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            iterations: crate::script::DEFAULT_ITERATIONS,
        }
    }
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulator rules.
    pub simulation: SimConfig,
    /// Driver loop settings.
    pub script: ScriptConfig,
}

impl Config {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`SimConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.simulation.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
