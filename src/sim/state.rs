//! World state and per-step event types
//!
//! Everything the engine reads and produces each tick lives here. All types
//! are small `Copy` values so a step can take a snapshot by value and hand
//! back a fresh one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::Config;
use crate::consts::COIN_SIZE;

/// Input vocabulary accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Idle,
    Left,
    Right,
    Jump,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Idle, Action::Left, Action::Right, Action::Jump];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Left => "left",
            Action::Right => "right",
            Action::Jump => "jump",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" | "noop" => Some(Action::Idle),
            "left" | "move-left" => Some(Action::Left),
            "right" | "move-right" => Some(Action::Right),
            "jump" => Some(Action::Jump),
            _ => None,
        }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Action::Left | Action::Right)
    }
}

/// The player-controlled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Resting on a platform top (enables jump and friction)
    pub grounded: bool,
}

impl Agent {
    pub fn rect(&self, config: &Config) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::new(config.agent_width, config.agent_height))
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// The single collectible
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Top-left corner of the 16×16 footprint
    pub pos: Vec2,
    /// Platform the coin was anchored to when it spawned
    pub spawn_index: usize,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(COIN_SIZE))
    }
}

/// Snapshot of an episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub agent: Agent,
    pub coin: Coin,
    /// Never decreases within an episode
    pub coins_collected: u32,
    /// Seconds until timeout; refilled on pickup
    pub time_left: f32,
    /// Spawn index of the most recent coin, excluded from the next respawn
    pub last_coin_spawn_index: usize,
}

/// Why an episode failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailReason {
    Timeout,
    Fall,
}

impl FailReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailReason::Timeout => "timeout",
            FailReason::Fall => "fall",
        }
    }
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvents {
    pub pickup: bool,
    pub win: bool,
    pub fail: Option<FailReason>,
}

impl StepEvents {
    /// Either a win or a failure fired this step
    pub fn is_terminal(&self) -> bool {
        self.win || self.fail.is_some()
    }
}

/// Episode lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeStatus {
    Running,
    Won,
    Failed(FailReason),
}

impl EpisodeStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EpisodeStatus::Running)
    }

    /// Status after a step's events. A win takes precedence over a
    /// simultaneous failure here; the events themselves keep both.
    pub fn after(events: &StepEvents) -> Self {
        if events.win {
            EpisodeStatus::Won
        } else if let Some(reason) = events.fail {
            EpisodeStatus::Failed(reason)
        } else {
            EpisodeStatus::Running
        }
    }
}
