//! Episode lifecycle
//!
//! `reset` builds the initial (state, RNG) pair from a seed. `Episode` owns
//! such a pair and applies the driver policy around the engine: stop
//! stepping once terminal, restart with the same seed on request.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{FLOOR_CENTER, PLATFORM_COUNT, platforms};
use super::rng::SpawnRng;
use super::state::{Action, Agent, Coin, EpisodeStatus, StepEvents, WorldState};
use super::tick::step;
use crate::config::Config;
use crate::consts::{COIN_HOVER, COIN_SIZE};

/// Coin centred on platform `spawn_index`, hovering above its top surface
pub fn spawn_coin(config: &Config, spawn_index: usize) -> Coin {
    let platform = platforms(config)[spawn_index];
    Coin {
        pos: Vec2::new(
            platform.left() + (platform.size.x / 2.0).floor() - COIN_SIZE / 2.0,
            platform.top() - COIN_HOVER,
        ),
        spawn_index,
    }
}

/// Start a new episode.
///
/// The first coin may land on any platform; the no-repeat rule only applies
/// to respawns. The returned RNG must be passed to every later `step`.
///
/// Panics if `config` is invalid.
pub fn reset(config: &Config, seed: u64) -> (WorldState, SpawnRng) {
    if let Err(e) = config.validate() {
        panic!("reset with invalid config: {e}");
    }

    let mut rng = SpawnRng::new(seed);
    let floor = platforms(config)[FLOOR_CENTER];

    let agent = Agent {
        pos: Vec2::new(
            (config.arena_width / 2.0).floor() - (config.agent_width / 2.0).floor(),
            floor.top() - config.agent_height,
        ),
        vel: Vec2::ZERO,
        grounded: true,
    };

    let all: Vec<usize> = (0..PLATFORM_COUNT).collect();
    let spawn_index = rng.pick(&all);
    let coin = spawn_coin(config, spawn_index);

    log::debug!("Reset with seed {seed}: first coin on platform {spawn_index}");

    let state = WorldState {
        agent,
        coin,
        coins_collected: 0,
        time_left: config.timer_budget,
        last_coin_spawn_index: spawn_index,
    };
    (state, rng)
}

/// Serializable outcome of an episode (or its progress so far)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub seed: u64,
    pub ticks: u64,
    pub coins_collected: u32,
    pub time_left: f32,
    pub status: EpisodeStatus,
}

/// A running episode: one state and one RNG, never shared
#[derive(Debug, Clone)]
pub struct Episode {
    config: Config,
    seed: u64,
    state: WorldState,
    rng: SpawnRng,
    status: EpisodeStatus,
    ticks: u64,
}

impl Episode {
    pub fn new(config: Config, seed: u64) -> Self {
        let (state, rng) = reset(&config, seed);
        Self {
            config,
            seed,
            state,
            rng,
            status: EpisodeStatus::Running,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    /// Steps taken since the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick. Returns `None` without touching the state once the
    /// episode has ended.
    pub fn step(&mut self, actions: &[Action]) -> Option<StepEvents> {
        if self.status.is_terminal() {
            log::warn!("Episode already ended ({:?}); ignoring step", self.status);
            return None;
        }

        let (next, events) = step(&self.config, self.state, actions, &mut self.rng);
        self.state = next;
        self.ticks += 1;
        self.status = EpisodeStatus::after(&events);

        match self.status {
            EpisodeStatus::Won => log::info!(
                "Won after {} ticks ({} coins)",
                self.ticks,
                self.state.coins_collected
            ),
            EpisodeStatus::Failed(reason) => log::info!(
                "Failed ({}) after {} ticks with {} coins",
                reason.as_str(),
                self.ticks,
                self.state.coins_collected
            ),
            EpisodeStatus::Running => {}
        }

        Some(events)
    }

    /// Start over with the same seed
    pub fn restart(&mut self) {
        self.restart_with_seed(self.seed);
    }

    pub fn restart_with_seed(&mut self, seed: u64) {
        let (state, rng) = reset(&self.config, seed);
        self.seed = seed;
        self.state = state;
        self.rng = rng;
        self.status = EpisodeStatus::Running;
        self.ticks = 0;
        log::info!("Episode restarted with seed {seed}");
    }

    pub fn summary(&self) -> EpisodeSummary {
        EpisodeSummary {
            seed: self.seed,
            ticks: self.ticks,
            coins_collected: self.state.coins_collected,
            time_left: self.state.time_left,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::FailReason;

    #[test]
    fn test_reset_places_agent_on_floor() {
        let config = Config::default();
        let (state, rng) = reset(&config, 0);
        assert_eq!(state.agent.pos, Vec2::new(308.0, 288.0));
        assert_eq!(state.agent.vel, Vec2::ZERO);
        assert!(state.agent.grounded);
        assert_eq!(state.coins_collected, 0);
        assert_eq!(state.time_left, config.timer_budget);
        assert_eq!(state.last_coin_spawn_index, state.coin.spawn_index);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_spawn_coin_positions() {
        let config = Config::default();
        // 213 / 2 floors to 106
        assert_eq!(spawn_coin(&config, 0).pos, Vec2::new(98.0, 300.0));
        assert_eq!(spawn_coin(&config, 1).pos, Vec2::new(312.0, 300.0));
        assert_eq!(spawn_coin(&config, 3).pos, Vec2::new(312.0, 220.0));
        assert_eq!(spawn_coin(&config, 5).pos, Vec2::new(532.0, 140.0));
        assert_eq!(spawn_coin(&config, 4).spawn_index, 4);
    }

    #[test]
    fn test_first_spawn_covers_every_platform() {
        let config = Config::default();
        let mut seen = [false; PLATFORM_COUNT];
        for seed in 0..200 {
            let (state, _) = reset(&config, seed);
            seen[state.coin.spawn_index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "invalid config")]
    fn test_reset_rejects_invalid_config() {
        let config = Config {
            dt: -1.0,
            ..Default::default()
        };
        reset(&config, 0);
    }

    #[test]
    fn test_episode_stops_after_timeout() {
        let config = Config {
            timer_budget: 0.05,
            ..Default::default()
        };
        let mut episode = Episode::new(config, 3);
        // Keep the coin out of reach
        episode.state.coin.pos = Vec2::new(-100.0, -100.0);

        let mut last = None;
        while episode.status() == EpisodeStatus::Running {
            last = episode.step(&[Action::Idle]);
            assert!(episode.ticks() < 10);
        }
        assert_eq!(last.and_then(|e| e.fail), Some(FailReason::Timeout));
        assert_eq!(episode.status(), EpisodeStatus::Failed(FailReason::Timeout));

        let frozen = *episode.state();
        assert_eq!(episode.step(&[Action::Right]), None);
        assert_eq!(*episode.state(), frozen);
    }

    #[test]
    fn test_restart_reproduces_initial_state() {
        let mut episode = Episode::new(Config::default(), 11);
        let initial = *episode.state();
        for _ in 0..20 {
            episode.step(&[Action::Right, Action::Jump]);
        }
        episode.restart();
        assert_eq!(*episode.state(), initial);
        assert_eq!(episode.ticks(), 0);
        assert_eq!(episode.status(), EpisodeStatus::Running);
    }

    #[test]
    fn test_summary_serializes() {
        let episode = Episode::new(Config::default(), 9);
        let json = serde_json::to_value(episode.summary()).unwrap();
        assert_eq!(json["seed"], 9);
        assert_eq!(json["status"], "running");
        assert_eq!(json["coins_collected"], 0);
    }
}
