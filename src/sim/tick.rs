//! Per-frame simulation step
//!
//! Advances the game by exactly one frame. Velocities are in surface pixels
//! per frame; there is no time delta.

use super::collision::ball_overlaps_rect;
use super::opponent::track_ball;
use super::rng::{RandomSource, serve_velocity_y};
use super::state::{GameEvent, GameState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer target for the human paddle's top edge
    pub pointer_y: Option<f32>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl RandomSource) {
    state.events.clear();
    state.frame += 1;

    // Buffered pointer input lands before anything moves
    if let Some(y) = input.pointer_y {
        state.player.y = state.config.clamp_paddle_y(y);
    }

    let config = state.config;

    // Move the ball
    state.ball.pos += state.ball.vel;

    // Top & bottom walls. No position correction: the flipped velocity
    // pulls the ball back next frame.
    if state.ball.top() < 0.0 || state.ball.bottom() > config.surface_height {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    // Only the paddle on the ball's half is tested
    let side = if state.ball.pos.x < config.surface_width / 2.0 {
        Side::Player
    } else {
        Side::Opponent
    };
    let paddle_rect = state.paddle(side).rect();
    let paddle_center = state.paddle(side).center_y();

    if ball_overlaps_rect(state.ball.pos, state.ball.radius, &paddle_rect) {
        let half_height = paddle_rect.height / 2.0;
        let offset = (state.ball.pos.y - paddle_center) / half_height;
        let angle = offset * config.max_bounce_angle;

        let ball = &mut state.ball;
        ball.vel.x = side.bounce_direction() * ball.speed * angle.cos();
        ball.vel.y = ball.speed * angle.sin();
        ball.speed += config.speed_increment;

        state.events.push(GameEvent::PaddleHit {
            side,
            offset,
            speed: ball.speed,
        });
    }

    // Left or right wall: point scored
    if state.ball.left() < 0.0 {
        score_point(state, Side::Opponent, rng);
    } else if state.ball.right() > config.surface_width {
        score_point(state, Side::Player, rng);
    }

    // Opponent moves every frame, including the frame of a reset
    track_ball(
        &mut state.opponent,
        state.ball.pos.y,
        config.surface_height,
        config.opponent_smoothing,
    );
}

/// Award a point and serve back toward the side that conceded
fn score_point(state: &mut GameState, scorer: Side, rng: &mut impl RandomSource) {
    state.paddle_mut(scorer).score += 1;
    state.events.push(GameEvent::Scored { side: scorer });

    let config = state.config;
    let ball = &mut state.ball;
    ball.pos = config.center();
    ball.vel.x = -ball.vel.x;
    ball.speed = config.ball_base_speed;
    ball.vel.y = serve_velocity_y(rng, config.serve_speed_min, config.serve_speed_max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::SimConfig;
    use crate::sim::rng::tests::SequenceRng;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const EPS: f32 = 1e-3;

    fn new_state() -> GameState {
        GameState::new(SimConfig::default())
    }

    /// Park both paddles somewhere the ball cannot reach them
    fn without_paddles(state: &mut GameState) {
        state.player.x = -1000.0;
        state.opponent.x = -1000.0;
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = new_state();
        let mut rng = SequenceRng::new(&[0.5]);
        state.ball.vel = Vec2::new(3.0, -2.0);

        tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(state.ball.pos, Vec2::new(403.0, 198.0));
        assert_eq!(state.frame, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_wall_bounce_flips_only_vertical() {
        let mut state = new_state();
        let mut rng = SequenceRng::new(&[0.5]);
        state.ball.pos = Vec2::new(400.0, 12.0);
        state.ball.vel = Vec2::new(4.0, -5.0);

        tick(&mut state, &TickInput::default(), &mut rng);

        // Not clamped: the ball sits partly outside for this frame
        assert_eq!(state.ball.pos, Vec2::new(404.0, 7.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 5.0));
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_dead_center_hit_on_player_paddle() {
        let mut state = new_state();
        let mut rng = SequenceRng::new(&[0.5]);
        // Player paddle spans x 20..35, y 150..250
        state.ball.pos = Vec2::new(48.0, 200.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(state.ball.vel.y, 0.0);
        assert!((state.ball.vel.x - 6.0).abs() < EPS);
        assert!((state.ball.speed - 6.3).abs() < EPS);
        assert_eq!(
            state.events,
            vec![GameEvent::PaddleHit {
                side: Side::Player,
                offset: 0.0,
                speed: state.ball.speed,
            }]
        );
    }

    #[test]
    fn test_dead_center_hit_on_opponent_paddle() {
        let mut state = new_state();
        let mut rng = SequenceRng::new(&[0.5]);
        // Opponent paddle spans x 765..780, y 150..250
        state.ball.pos = Vec2::new(752.0, 200.0);
        state.ball.vel = Vec2::new(6.0, 0.0);

        tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(state.ball.vel.y, 0.0);
        assert!((state.ball.vel.x + 6.0).abs() < EPS);
    }

    #[test]
    fn test_edge_hit_deflects_at_max_angle() {
        let mut state = new_state();
        let mut rng = SequenceRng::new(&[0.5]);
        // Lands exactly on the paddle's bottom edge (offset +1)
        state.ball.pos = Vec2::new(48.0, 250.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        tick(&mut state, &TickInput::default(), &mut rng);

        let component = 6.0 * std::f32::consts::FRAC_PI_4.cos();
        assert!((state.ball.vel.x - component).abs() < EPS);
        assert!((state.ball.vel.y - component).abs() < EPS);
    }

    #[test]
    fn test_far_paddle_is_never_tested() {
        let mut state = new_state();
        let mut rng = SequenceRng::new(&[0.5]);
        // Ball on the right half but overlapping a player paddle moved there
        state.player.x = 600.0;
        state.ball.pos = Vec2::new(598.0, 200.0);
        state.ball.vel = Vec2::new(2.0, 0.0);

        tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(state.ball.vel, Vec2::new(2.0, 0.0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_opponent_scores_on_left_exit() {
        let mut state = new_state();
        without_paddles(&mut state);
        let mut rng = SequenceRng::new(&[0.25, 0.75]);
        state.ball.pos = Vec2::new(12.0, 100.0);
        state.ball.vel = Vec2::new(-7.0, 1.0);
        state.ball.speed = 7.5;

        tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(state.scores(), (0, 1));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(7.0, 3.0));
        assert_eq!(state.ball.speed, 6.0);
        assert_eq!(state.events, vec![GameEvent::Scored { side: Side::Opponent }]);
    }

    #[test]
    fn test_player_scores_on_right_exit() {
        let mut state = new_state();
        without_paddles(&mut state);
        let mut rng = SequenceRng::new(&[1.0 - f64::EPSILON, 0.1]);
        state.ball.pos = Vec2::new(786.0, 100.0);
        state.ball.vel = Vec2::new(6.0, 2.0);

        tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(state.scores(), (1, 0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel.x, -6.0);
        assert!(state.ball.vel.y < -5.9 && state.ball.vel.y > -6.0);
    }

    #[test]
    fn test_paddle_hit_is_resolved_before_scoring() {
        let mut state = new_state();
        let mut rng = SequenceRng::new(&[0.5]);
        // Ball overlaps the player paddle and its left edge is already past 0
        state.player.x = 0.0;
        state.ball.pos = Vec2::new(14.0, 200.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        tick(&mut state, &TickInput::default(), &mut rng);

        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::PaddleHit { .. }, GameEvent::Scored { side: Side::Opponent }]
        ));
        // Reset negates the freshly bounced velocity
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.speed, 6.0);
    }

    #[test]
    fn test_pointer_input_clamped_and_applied() {
        let mut state = new_state();
        let mut rng = SequenceRng::new(&[0.5]);

        let input = TickInput {
            pointer_y: Some(-30.0),
        };
        tick(&mut state, &input, &mut rng);
        assert_eq!(state.player.y, 0.0);

        let input = TickInput {
            pointer_y: Some(420.0),
        };
        tick(&mut state, &input, &mut rng);
        assert_eq!(state.player.y, 300.0);

        // No input leaves the paddle where it was
        tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.player.y, 300.0);
    }

    #[test]
    fn test_opponent_tracks_every_frame() {
        let mut state = new_state();
        without_paddles(&mut state);
        let mut rng = SequenceRng::new(&[0.5]);
        state.opponent.y = 100.0;
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state, &TickInput::default(), &mut rng);
        assert!((state.opponent.y - 113.5).abs() < EPS);

        // Also on the frame of a reset
        state.opponent.y = 0.0;
        state.ball.pos = Vec2::new(5.0, 300.0);
        tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.scores(), (0, 1));
        // Tracks the reset ball at center (200 - 50) * 0.09
        assert!((state.opponent.y - 13.5).abs() < EPS);
    }

    #[test]
    fn test_linear_flight_with_wall_reflections() {
        let mut state = new_state();
        without_paddles(&mut state);
        state.config.surface_width = 1.0e6;
        let mut rng = SequenceRng::new(&[0.5]);
        state.ball.vel = Vec2::new(6.0, 6.0);

        let height = state.config.surface_height;
        let radius = state.ball.radius;
        let (mut x, mut y, mut vy) = (400.0f32, 200.0f32, 6.0f32);

        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), &mut rng);

            x += 6.0;
            y += vy;
            if y - radius < 0.0 || y + radius > height {
                vy = -vy;
            }

            assert_eq!(state.ball.pos, Vec2::new(x, y));
            assert_eq!(state.ball.vel.y, vy);
        }
        assert_eq!(state.scores(), (0, 0));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = new_state();
        let mut b = new_state();
        let mut rng_a = Pcg32::seed_from_u64(99999);
        let mut rng_b = Pcg32::seed_from_u64(99999);

        for i in 0..5000 {
            let input = TickInput {
                pointer_y: Some((i % 300) as f32),
            };
            tick(&mut a, &input, &mut rng_a);
            tick(&mut b, &input, &mut rng_b);
        }

        assert_eq!(a.scores(), b.scores());
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.opponent.y, b.opponent.y);
        assert!(a.player.score + a.opponent.score > 0);
    }

    proptest! {
        #[test]
        fn wall_contact_negates_vertical_only(
            x in 300.0f32..500.0,
            vx in -5.0f32..5.0,
            vy in 1.0f32..8.0,
            top in proptest::bool::ANY,
        ) {
            let mut state = new_state();
            let mut rng = SequenceRng::new(&[0.5]);
            // Start so that after the move the ball crosses the chosen wall
            let (y, vy) = if top { (5.0, -vy) } else { (395.0, vy) };
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);

            tick(&mut state, &TickInput::default(), &mut rng);

            prop_assert_eq!(state.ball.vel.x, vx);
            prop_assert_eq!(state.ball.vel.y, -vy);
        }

        #[test]
        fn paddle_hit_speeds_up_and_keeps_magnitude(
            offset in -1.0f32..1.0,
            speed in 4.0f32..15.0,
        ) {
            let mut state = new_state();
            let mut rng = SequenceRng::new(&[0.5]);
            // Ball already overlapping the player paddle before the move
            state.ball.pos = Vec2::new(40.0, 200.0 + offset * 50.0);
            state.ball.vel = Vec2::ZERO;
            state.ball.speed = speed;

            tick(&mut state, &TickInput::default(), &mut rng);

            let after = speed + 0.3;
            prop_assert!((state.ball.speed - after).abs() < EPS);
            prop_assert!((state.ball.vel.length() - speed).abs() < EPS);
            prop_assert!(state.ball.vel.x > 0.0);
        }
    }
}
