//! Axis-separated collision response against static platforms
//!
//! Each axis is resolved on its own pass. Every overlapping platform is
//! handled independently in table order; there is no closest-contact search,
//! so when two platforms overlap the agent the later one has the last word.

use super::geometry::Rect;
use super::state::Agent;
use crate::config::Config;

/// Result of one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Number of platforms the agent was pushed out of
    pub resolved: u32,
    /// Landed on a platform top (vertical pass only)
    pub landed: bool,
}

/// Push the agent out of platforms along x after horizontal integration
pub fn resolve_horizontal(agent: &mut Agent, config: &Config, platforms: &[Rect]) -> Contacts {
    let mut contacts = Contacts::default();
    for platform in platforms {
        if !agent.rect(config).intersects(platform) {
            continue;
        }
        if agent.vel.x > 0.0 {
            // Moving right, hit the left side
            agent.pos.x = platform.left() - config.agent_width;
        } else {
            agent.pos.x = platform.right();
        }
        agent.vel.x = 0.0;
        contacts.resolved += 1;
    }
    contacts
}

/// Push the agent out of platforms along y after vertical integration.
///
/// Landing on a top surface sets `grounded`.
pub fn resolve_vertical(agent: &mut Agent, config: &Config, platforms: &[Rect]) -> Contacts {
    let mut contacts = Contacts::default();
    for platform in platforms {
        if !agent.rect(config).intersects(platform) {
            continue;
        }
        if agent.vel.y > 0.0 {
            // Falling, hit the top
            agent.pos.y = platform.top() - config.agent_height;
            agent.grounded = true;
            contacts.landed = true;
        } else {
            agent.pos.y = platform.bottom();
        }
        agent.vel.y = 0.0;
        contacts.resolved += 1;
    }
    contacts
}

/// Clamp x into `[0, arena_width - agent_width]`, zeroing vx on contact.
///
/// Returns true if the agent touched a wall.
pub fn clamp_to_arena(agent: &mut Agent, config: &Config) -> bool {
    let max_x = config.arena_width - config.agent_width;
    if agent.pos.x < 0.0 {
        agent.pos.x = 0.0;
        agent.vel.x = 0.0;
        true
    } else if agent.pos.x > max_x {
        agent.pos.x = max_x;
        agent.vel.x = 0.0;
        true
    } else {
        false
    }
}
