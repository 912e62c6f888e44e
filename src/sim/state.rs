//! Game state and core simulation types
//!
//! `GameState` is the whole simulation context. The frame driver owns it and
//! passes it to `tick`; nothing lives in globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::config::SimConfig;

/// Which side of the surface a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, pointer controlled
    Player,
    /// Right paddle, driven by the opponent controller
    Opponent,
}

impl Side {
    /// Horizontal direction the ball leaves this paddle in
    pub fn bounce_direction(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Opponent => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// A paddle. `x` is fixed per side, `y` is the top edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Create a vertically centered paddle for the given side
    pub fn new(side: Side, config: &SimConfig) -> Self {
        let x = match side {
            Side::Player => config.player_x(),
            Side::Opponent => config.opponent_x(),
        };
        Self {
            side,
            x,
            y: config.surface_height / 2.0 - config.paddle_height / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
            score: 0,
        }
    }

    /// Bounding box for collision tests
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Vertical center
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// The ball
///
/// `speed` is the magnitude used when a paddle hit resynthesizes the
/// velocity. Wall bounces only flip `vel.y`, so the two can drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    /// Ball at the center of the surface, heading down-right at base speed
    pub fn new(config: &SimConfig) -> Self {
        let speed = config.ball_base_speed;
        Self {
            pos: config.center(),
            vel: Vec2::new(speed, speed),
            radius: config.ball_radius,
            speed,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Things that happened during a tick (for logging/effects, never fed back)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball touched the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit {
        side: Side,
        /// Impact offset from paddle center, roughly [-1, 1]
        offset: f32,
        /// Ball speed after the hit
        speed: f32,
    },
    /// `side` won the point
    Scored { side: Side },
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    /// Human paddle (left)
    pub player: Paddle,
    /// Opponent paddle (right)
    pub opponent: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub frame: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh game: paddles centered on their sides, ball at center
    pub fn new(config: SimConfig) -> Self {
        Self {
            player: Paddle::new(Side::Player, &config),
            opponent: Paddle::new(Side::Opponent, &config),
            ball: Ball::new(&config),
            frame: 0,
            events: Vec::new(),
            config,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Current score line as (player, opponent)
    pub fn scores(&self) -> (u32, u32) {
        (self.player.score, self.opponent.score)
    }
}
