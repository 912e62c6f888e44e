//! Frame composition
//!
//! Turns the simulation state into one vertex list. Pure, so it runs without a
//! GPU; the pipeline only uploads and draws the result.

use super::shapes::{self, GlyphSize};
use super::vertex::{Vertex, colors};
use crate::consts::{NET_DASH, NET_WIDTH};
use crate::settings::{Settings, Theme};
use crate::sim::{GameState, Paddle};

/// Score font size in surface pixels
const SCORE_FONT_PX: f32 = 40.0;
/// Score baseline, measured from the top of the surface
const SCORE_BASELINE: f32 = 50.0;
/// FPS readout font size
const FPS_FONT_PX: f32 = 16.0;
/// Circle tessellation for the ball
const BALL_SEGMENTS: u32 = 32;

/// Per-frame values that are not part of the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    pub fps: u32,
}

/// Background clear color for a theme
pub fn background(theme: Theme) -> [f32; 4] {
    match theme {
        Theme::Classic => colors::BACKGROUND,
        Theme::HighContrast => colors::CONTRAST_BACKGROUND,
    }
}

fn ball_color(theme: Theme) -> [f32; 4] {
    match theme {
        Theme::Classic => colors::BALL,
        Theme::HighContrast => colors::CONTRAST_BALL,
    }
}

fn paddle(p: &Paddle) -> Vec<Vertex> {
    shapes::rect(p.x, p.y, p.width, p.height, colors::PADDLE)
}

/// Build every vertex for the current frame, back to front
pub fn build(state: &GameState, settings: &Settings, overlay: Overlay) -> Vec<Vertex> {
    let config = &state.config;
    let (w, h) = (config.surface_width, config.surface_height);
    let mut vertices = Vec::with_capacity(512);

    vertices.extend(shapes::rect(0.0, 0.0, w, h, background(settings.theme)));

    if settings.show_net {
        vertices.extend(shapes::net(w, h, NET_WIDTH, NET_DASH, colors::NET));
    }

    let score_size = GlyphSize::for_font(SCORE_FONT_PX);
    vertices.extend(shapes::number(
        state.player.score,
        w / 4.0,
        SCORE_BASELINE,
        score_size,
        colors::SCORE,
    ));
    vertices.extend(shapes::number(
        state.opponent.score,
        3.0 * w / 4.0,
        SCORE_BASELINE,
        score_size,
        colors::SCORE,
    ));

    vertices.extend(paddle(&state.player));
    vertices.extend(paddle(&state.opponent));
    vertices.extend(shapes::circle(
        state.ball.pos,
        state.ball.radius,
        ball_color(settings.theme),
        BALL_SEGMENTS,
    ));

    if settings.show_fps {
        let size = GlyphSize::for_font(FPS_FONT_PX);
        vertices.extend(shapes::number(overlay.fps, 6.0, 6.0 + size.height, size, colors::FPS));
    }

    vertices
}
