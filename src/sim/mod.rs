//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platform table order)
//! - No rendering, input-device or clock dependencies

pub mod collision;
pub mod episode;
pub mod geometry;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Contacts, clamp_to_arena, resolve_horizontal, resolve_vertical};
pub use episode::{Episode, EpisodeSummary, reset, spawn_coin};
pub use geometry::{PLATFORM_COUNT, Rect, platforms};
pub use rng::SpawnRng;
pub use state::{Action, Agent, Coin, EpisodeStatus, FailReason, StepEvents, WorldState};
pub use tick::step;
