//! Canvas Pong - classic two-paddle Pong on a 2D surface
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, scoring, opponent)
//! - `game`: Frame driver that owns the simulation context
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Pointer input mapping
//! - `settings`: Player preferences and configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, Theme};

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions (canvas pixels)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between each paddle and its side of the surface
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed the ball is served at after every point
    pub const BALL_BASE_SPEED: f32 = 6.0;
    /// Added to ball speed on every paddle hit
    pub const PADDLE_HIT_SPEED_INCREMENT: f32 = 0.3;
    /// Maximum deflection from horizontal on a paddle hit (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Serve vertical speed is drawn from [min, max)
    pub const SERVE_SPEED_MIN: f32 = 2.0;
    pub const SERVE_SPEED_MAX: f32 = 6.0;

    /// Fraction of the remaining distance the opponent closes per frame
    pub const OPPONENT_SMOOTHING: f32 = 0.09;

    /// Net dashes
    pub const NET_WIDTH: f32 = 4.0;
    pub const NET_DASH: f32 = 20.0;
}

