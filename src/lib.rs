//! Coin Timer - a deterministic headless platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, episode state)
//! - `config`: Data-driven tunables, loadable from JSON
//! - `autopilot`: Action policies for headless rollouts

pub mod autopilot;
pub mod config;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::{Config, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 360.0;
    /// Falling past this y ends the episode
    pub const DEATH_Y: f32 = 410.0;

    /// Downward acceleration, pixels/s²
    pub const GRAVITY: f32 = 1500.0;

    /// Agent box
    pub const AGENT_WIDTH: f32 = 24.0;
    pub const AGENT_HEIGHT: f32 = 32.0;
    /// Horizontal acceleration while grounded / airborne, pixels/s²
    pub const ACCEL_GROUND: f32 = 3000.0;
    pub const ACCEL_AIR: f32 = 1500.0;
    pub const MAX_SPEED_X: f32 = 250.0;
    /// Upward jump velocity (negative is up)
    pub const JUMP_IMPULSE: f32 = -500.0;
    /// Per-step damping on vx when grounded without horizontal input
    pub const GROUND_FRICTION: f32 = 0.85;

    /// Seconds granted per coin
    pub const TIMER_BUDGET: f32 = 10.0;
    pub const COINS_TO_WIN: u32 = 10;

    /// Coin footprint (square)
    pub const COIN_SIZE: f32 = 16.0;
    /// Coin hovers this far above its platform's top surface
    pub const COIN_HOVER: f32 = 20.0;

    /// Platform layout
    pub const FLOOR_THICKNESS: f32 = 40.0;
    pub const LEDGE_THICKNESS: f32 = 15.0;
    pub const MID_PLATFORM_WIDTH: f32 = 240.0;
    pub const MID_PLATFORM_RISE: f32 = 80.0;
    pub const ARM_WIDTH: f32 = 200.0;
    pub const ARM_RISE: f32 = 160.0;
}
