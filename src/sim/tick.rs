//! Fixed timestep simulation step
//!
//! Advances the world by one tick. Stage order is part of the physics and
//! must not be rearranged.

use super::collision::{clamp_to_arena, resolve_horizontal, resolve_vertical};
use super::episode::spawn_coin;
use super::geometry::{PLATFORM_COUNT, platforms};
use super::rng::SpawnRng;
use super::state::{Action, Agent, FailReason, StepEvents, WorldState};
use crate::config::Config;

/// Advance `state` by one `config.dt` under `actions`.
///
/// The input snapshot is consumed and a fresh one returned; the RNG is only
/// drawn from when a coin is picked up.
///
/// Panics if the incoming agent, coin or timer is not finite.
pub fn step(
    config: &Config,
    state: WorldState,
    actions: &[Action],
    rng: &mut SpawnRng,
) -> (WorldState, StepEvents) {
    assert!(
        state.agent.is_finite(),
        "non-finite agent state: {:?}",
        state.agent
    );
    assert!(
        state.coin.pos.is_finite(),
        "non-finite coin position: {:?}",
        state.coin.pos
    );
    assert!(
        state.time_left.is_finite(),
        "non-finite time_left: {}",
        state.time_left
    );

    let mut next = state;
    let mut events = StepEvents::default();
    let table = platforms(config);

    next.time_left -= config.dt;

    // Horizontal: input, friction, clamp, integrate, walls, platforms
    let horizontal_input = apply_horizontal_input(&mut next.agent, config, actions);
    if next.agent.grounded && !horizontal_input {
        next.agent.vel.x *= config.ground_friction;
    }
    next.agent.vel.x = next
        .agent
        .vel
        .x
        .clamp(-config.max_speed_x, config.max_speed_x);
    next.agent.pos.x += next.agent.vel.x * config.dt;
    let hit_wall = clamp_to_arena(&mut next.agent, config);
    let side = resolve_horizontal(&mut next.agent, config, &table);

    // Vertical: gravity, jump, integrate, platforms
    next.agent.vel.y += config.gravity * config.dt;
    if next.agent.grounded && actions.contains(&Action::Jump) {
        next.agent.vel.y = config.jump_impulse;
    }
    next.agent.grounded = false;
    next.agent.pos.y += next.agent.vel.y * config.dt;
    let vertical = resolve_vertical(&mut next.agent, config, &table);

    if next.agent.rect(config).intersects(&next.coin.rect()) {
        events.pickup = true;
        next.coins_collected += 1;
        next.time_left = config.timer_budget;

        let spawn_index = rng.pick_excluding(PLATFORM_COUNT, next.last_coin_spawn_index);
        next.coin = spawn_coin(config, spawn_index);
        next.last_coin_spawn_index = spawn_index;
        log::debug!(
            "Coin {} collected, respawned on platform {}",
            next.coins_collected,
            spawn_index
        );
    }

    // Win and fail are independent; both may fire on the same step.
    if next.coins_collected >= config.coins_to_win {
        events.win = true;
    }
    if next.time_left <= 0.0 {
        events.fail = Some(FailReason::Timeout);
    } else if next.agent.pos.y >= config.death_y {
        events.fail = Some(FailReason::Fall);
    }

    log::trace!(
        "step: pos={:?} vel={:?} grounded={} wall={} side={} vertical={} time_left={:.3} events={:?}",
        next.agent.pos,
        next.agent.vel,
        next.agent.grounded,
        hit_wall,
        side.resolved,
        vertical.resolved,
        next.time_left,
        events
    );

    (next, events)
}

/// Apply every horizontal action in the list, returning whether any fired.
///
/// Acceleration is picked from the grounded flag at the start of the step.
fn apply_horizontal_input(agent: &mut Agent, config: &Config, actions: &[Action]) -> bool {
    let accel = if agent.grounded {
        config.accel_ground
    } else {
        config.accel_air
    };
    let mut fired = false;
    for action in actions.iter().filter(|a| a.is_horizontal()) {
        if *action == Action::Left {
            agent.vel.x -= accel * config.dt;
        } else {
            agent.vel.x += accel * config.dt;
        }
        fired = true;
    }
    fired
}
