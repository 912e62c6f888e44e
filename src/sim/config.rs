//! Simulation configuration
//!
//! Fixed for the lifetime of a run. Validated once at the boundary
//! (settings load, game construction); the simulation trusts it afterwards.

use std::{error::Error, fmt::Display};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Every constant the simulation depends on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side of the surface
    pub paddle_margin: f32,
    pub ball_radius: f32,
    /// Ball speed on every serve
    pub ball_base_speed: f32,
    /// Speed gained per paddle hit
    pub speed_increment: f32,
    /// Opponent smoothing factor, in (0, 1]
    pub opponent_smoothing: f32,
    /// Max deflection from horizontal (radians)
    pub max_bounce_angle: f32,
    pub serve_speed_min: f32,
    pub serve_speed_max: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            speed_increment: PADDLE_HIT_SPEED_INCREMENT,
            opponent_smoothing: OPPONENT_SMOOTHING,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
            serve_speed_min: SERVE_SPEED_MIN,
            serve_speed_max: SERVE_SPEED_MAX,
        }
    }
}

impl SimConfig {
    /// Center of the surface
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }

    /// X of the human (left) paddle
    pub fn player_x(&self) -> f32 {
        self.paddle_margin
    }

    /// X of the opponent (right) paddle
    pub fn opponent_x(&self) -> f32 {
        self.surface_width - self.paddle_margin - self.paddle_width
    }

    /// Lowest valid paddle top coordinate
    pub fn paddle_max_y(&self) -> f32 {
        self.surface_height - self.paddle_height
    }

    /// Clamp a paddle top coordinate into the visible surface
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.max(0.0).min(self.paddle_max_y())
    }

    /// Check the configuration can drive a simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
            ("speed_increment", self.speed_increment),
            ("opponent_smoothing", self.opponent_smoothing),
            ("max_bounce_angle", self.max_bounce_angle),
            ("serve_speed_min", self.serve_speed_min),
            ("serve_speed_max", self.serve_speed_max),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field: *field });
        }

        // Paddle height is a divisor in the deflection math
        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NonPositive { field: *field });
        }

        if self.paddle_height > self.surface_height {
            return Err(ConfigError::PaddleTallerThanSurface);
        }
        if self.opponent_smoothing <= 0.0 || self.opponent_smoothing > 1.0 {
            return Err(ConfigError::SmoothingOutOfRange);
        }
        if self.serve_speed_min < 0.0 || self.serve_speed_max <= self.serve_speed_min {
            return Err(ConfigError::InvalidServeRange);
        }
        Ok(())
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ConfigError {
    NonFinite { field: &'static str },
    NonPositive { field: &'static str },
    PaddleTallerThanSurface,
    SmoothingOutOfRange,
    InvalidServeRange,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonFinite { field } => write!(f, "{field} is not a finite number"),
            ConfigError::NonPositive { field } => write!(f, "{field} must be greater than zero"),
            ConfigError::PaddleTallerThanSurface => {
                Display::fmt("paddle is taller than the surface", f)
            }
            ConfigError::SmoothingOutOfRange => {
                Display::fmt("opponent smoothing must be in (0, 1]", f)
            }
            ConfigError::InvalidServeRange => Display::fmt("serve speed range is empty", f),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.center(), Vec2::new(400.0, 200.0));
        assert_eq!(config.player_x(), 20.0);
        assert_eq!(config.opponent_x(), 765.0);
        assert_eq!(config.paddle_max_y(), 300.0);
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = SimConfig::default();
        assert_eq!(config.clamp_paddle_y(-40.0), 0.0);
        assert_eq!(config.clamp_paddle_y(150.0), 150.0);
        assert_eq!(config.clamp_paddle_y(1000.0), 300.0);
    }

    #[test]
    fn test_zero_paddle_height_rejected() {
        let config = SimConfig {
            paddle_height: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "paddle_height"
            })
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let nan = SimConfig {
            ball_radius: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            nan.validate(),
            Err(ConfigError::NonFinite {
                field: "ball_radius"
            })
        );

        let tall = SimConfig {
            paddle_height: 500.0,
            ..Default::default()
        };
        assert_eq!(tall.validate(), Err(ConfigError::PaddleTallerThanSurface));

        let smoothing = SimConfig {
            opponent_smoothing: 1.5,
            ..Default::default()
        };
        assert_eq!(smoothing.validate(), Err(ConfigError::SmoothingOutOfRange));

        let serve = SimConfig {
            serve_speed_min: 6.0,
            serve_speed_max: 2.0,
            ..Default::default()
        };
        assert_eq!(serve.validate(), Err(ConfigError::InvalidServeRange));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::NonPositive {
            field: "paddle_height",
        };
        assert_eq!(err.to_string(), "paddle_height must be greater than zero");
        assert_eq!(
            ConfigError::InvalidServeRange.to_string(),
            "serve speed range is empty"
        );
    }
}
