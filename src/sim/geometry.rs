//! Static platform geometry
//!
//! The platform table is a pure function of the arena configuration:
//! a floor split into three sections, a centre ledge, and two side arms.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::consts::*;

/// Number of platforms in the table
pub const PLATFORM_COUNT: usize = 6;

/// Table indices
pub const FLOOR_LEFT: usize = 0;
pub const FLOOR_CENTER: usize = 1;
pub const FLOOR_RIGHT: usize = 2;
pub const MID_PLATFORM: usize = 3;
pub const LEFT_ARM: usize = 4;
pub const RIGHT_ARM: usize = 5;

/// Axis-aligned rectangle in arena pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Platform rectangles in table order.
///
/// Collision resolution walks this order, so it is part of the physics.
pub fn platforms(config: &Config) -> [Rect; PLATFORM_COUNT] {
    let w = config.arena_width;
    let floor_y = config.arena_height - FLOOR_THICKNESS;
    let third = (w / 3.0).floor();
    let mid_y = floor_y - MID_PLATFORM_RISE;
    let arm_y = floor_y - ARM_RISE;

    [
        Rect::new(0.0, floor_y, third, FLOOR_THICKNESS),
        Rect::new(third, floor_y, w - 2.0 * third, FLOOR_THICKNESS),
        Rect::new(w - third, floor_y, third, FLOOR_THICKNESS),
        Rect::new(
            (w - MID_PLATFORM_WIDTH) / 2.0,
            mid_y,
            MID_PLATFORM_WIDTH,
            LEDGE_THICKNESS,
        ),
        Rect::new(0.0, arm_y, ARM_WIDTH, LEDGE_THICKNESS),
        Rect::new(w - ARM_WIDTH, arm_y, ARM_WIDTH, LEDGE_THICKNESS),
    ]
}
