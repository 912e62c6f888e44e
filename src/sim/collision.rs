//! Collision detection between the ball and paddles
//!
//! The ball is treated as its axis-aligned bounding box. Comparisons are
//! strict, so edges that exactly touch do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left origin, y down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Check whether a ball's bounding box overlaps a rectangle
pub fn ball_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x - radius < rect.right()
        && center.x + radius > rect.x
        && center.y - radius < rect.bottom()
        && center.y + radius > rect.y
}
