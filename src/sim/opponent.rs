//! Opponent paddle controller
//!
//! First-order smoothing toward the ball: each frame the paddle closes a
//! fixed fraction of the distance between its top edge and the position
//! that would center it on the ball. It lags and never overshoots, which
//! keeps it beatable.

use super::state::Paddle;

/// Move `paddle` toward `ball_y`, then clamp it into `[0, surface_height - height]`
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, surface_height: f32, smoothing: f32) {
    let target = ball_y - paddle.height / 2.0;
    paddle.y += (target - paddle.y) * smoothing;

    if paddle.y < 0.0 {
        paddle.y = 0.0;
    }
    if paddle.y + paddle.height > surface_height {
        paddle.y = surface_height - paddle.height;
    }
}
