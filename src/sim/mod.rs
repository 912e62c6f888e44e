//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod opponent;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_overlaps_rect};
pub use config::{ConfigError, SimConfig};
pub use opponent::track_ball;
pub use rng::{RandomSource, serve_velocity_y};
pub use state::{Ball, GameEvent, GameState, Paddle, Side};
pub use tick::{TickInput, tick};
