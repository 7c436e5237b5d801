//! Simulation tunables
//!
//! Immutable for the lifetime of an episode. Loaded from JSON; any field
//! left out of the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Physics and rules configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub gravity: f32,
    /// Agent y at or beyond this line fails the episode
    pub death_y: f32,

    /// Fixed timestep (seconds)
    pub dt: f32,

    // === Agent ===
    pub agent_width: f32,
    pub agent_height: f32,
    pub accel_ground: f32,
    pub accel_air: f32,
    pub max_speed_x: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_impulse: f32,
    /// Multiplier applied to vx once per grounded step with no horizontal input
    pub ground_friction: f32,

    // === Objectives ===
    /// Seconds granted per coin
    pub timer_budget: f32,
    pub coins_to_win: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            gravity: GRAVITY,
            death_y: DEATH_Y,

            dt: SIM_DT,

            agent_width: AGENT_WIDTH,
            agent_height: AGENT_HEIGHT,
            accel_ground: ACCEL_GROUND,
            accel_air: ACCEL_AIR,
            max_speed_x: MAX_SPEED_X,
            jump_impulse: JUMP_IMPULSE,
            ground_friction: GROUND_FRICTION,

            timer_budget: TIMER_BUDGET,
            coins_to_win: COINS_TO_WIN,
        }
    }
}

impl Config {
    /// Parse a JSON document and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check the invariants the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("gravity", self.gravity),
            ("death_y", self.death_y),
            ("dt", self.dt),
            ("agent_width", self.agent_width),
            ("agent_height", self.agent_height),
            ("accel_ground", self.accel_ground),
            ("accel_air", self.accel_air),
            ("max_speed_x", self.max_speed_x),
            ("jump_impulse", self.jump_impulse),
            ("ground_friction", self.ground_friction),
            ("timer_budget", self.timer_budget),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(*field, "must be finite"));
        }

        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("dt", self.dt),
            ("agent_width", self.agent_width),
            ("agent_height", self.agent_height),
            ("max_speed_x", self.max_speed_x),
            ("timer_budget", self.timer_budget),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(invalid(*field, "must be positive"));
        }

        if self.accel_ground < 0.0 {
            return Err(invalid("accel_ground", "must not be negative"));
        }
        if self.accel_air < 0.0 {
            return Err(invalid("accel_air", "must not be negative"));
        }
        if self.ground_friction <= 0.0 || self.ground_friction > 1.0 {
            return Err(invalid("ground_friction", "must be in (0, 1]"));
        }
        if self.jump_impulse >= 0.0 {
            return Err(invalid("jump_impulse", "must be negative (upward)"));
        }
        if self.agent_width >= self.arena_width {
            return Err(invalid("agent_width", "must be narrower than the arena"));
        }
        if self.coins_to_win == 0 {
            return Err(invalid("coins_to_win", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
