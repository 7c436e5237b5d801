//! Action policies for headless rollouts
//!
//! Stand-ins for a human at the keyboard. None of them touch the episode's
//! spawn RNG; the random policy carries its own generator.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::consts::COIN_SIZE;
use crate::sim::{Action, WorldState};

/// Horizontal slack before the chaser steers (pixels)
const CHASE_DEADZONE: f32 = 4.0;

#[derive(Debug, Clone)]
pub enum Autopilot {
    /// Never presses anything
    Idle,
    /// One uniformly random action per tick
    Random { rng: Pcg32 },
    /// Walks toward the coin and jumps when it is overhead
    Chase,
}

impl Autopilot {
    pub fn random(seed: u64) -> Self {
        Autopilot::Random {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Autopilot::Idle => "idle",
            Autopilot::Random { .. } => "random",
            Autopilot::Chase => "chase",
        }
    }

    /// Actions to feed the next step
    pub fn actions(&mut self, config: &Config, state: &WorldState) -> Vec<Action> {
        match self {
            Autopilot::Idle => vec![Action::Idle],
            Autopilot::Random { rng } => {
                vec![Action::ALL[rng.random_range(0..Action::ALL.len())]]
            }
            Autopilot::Chase => chase(config, state),
        }
    }
}

fn chase(config: &Config, state: &WorldState) -> Vec<Action> {
    let agent = &state.agent;
    let agent_center = agent.pos.x + config.agent_width / 2.0;
    let coin_center = state.coin.pos.x + COIN_SIZE / 2.0;
    let dx = coin_center - agent_center;

    let mut actions = Vec::with_capacity(2);
    if dx < -CHASE_DEADZONE {
        actions.push(Action::Left);
    } else if dx > CHASE_DEADZONE {
        actions.push(Action::Right);
    }

    // Coin bottom above the agent's head
    if agent.grounded && state.coin.pos.y + COIN_SIZE < agent.pos.y {
        actions.push(Action::Jump);
    }

    if actions.is_empty() {
        actions.push(Action::Idle);
    }
    actions
}
