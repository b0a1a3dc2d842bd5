use hecs::World;
use rand::Rng;

use crate::{Arena, AutoplayConfig, AutoplayState, Ball, Config, GameRng, Paddle, Strategy, Time};

/// Minimum |dx| considered meaningful for trajectory projection
const MIN_HORIZONTAL_SPEED: f32 = 1e-4;

/// Project the ball's straight-line trajectory to the vertical line
/// `x = paddle_x` and fold the result back into `[0, height]` by mirroring,
/// which accounts for any number of wall bounces on the way. Returns `None`
/// when the ball has (near-)zero horizontal velocity.
pub fn predict_intercept_y(ball: &Ball, paddle_x: f32, arena: &Arena) -> Option<f32> {
    if ball.vel.x.abs() < MIN_HORIZONTAL_SPEED {
        return None;
    }
    let steps = (paddle_x - ball.pos.x).abs() / ball.vel.x.abs();
    let mut future_y = ball.pos.y + ball.vel.y * steps;

    while future_y < 0.0 || future_y > arena.height {
        if future_y < 0.0 {
            future_y = -future_y;
        } else {
            future_y = 2.0 * arena.height - future_y;
        }
    }

    Some(future_y)
}

/// Target center-y with aim noise applied. Zero error margin is optimal play.
pub fn compute_target(predicted_y: f32, noise: f32) -> f32 {
    predicted_y + noise
}

fn sample_noise(cfg: &AutoplayConfig, rng: &mut GameRng) -> f32 {
    let margin = cfg.error_margin();
    if margin == 0.0 {
        return 0.0;
    }
    (rng.0.gen::<f32>() - 0.5) * margin
}

/// Move the paddle toward `target_center_y` at bounded speed: a proportional
/// approach scaled by the smoothing factor, capped at `max_speed * dt`, and
/// the resulting top edge clamped into the arena. Never teleports.
pub fn step_paddle_toward(
    paddle: &mut Paddle,
    target_center_y: f32,
    cfg: &AutoplayConfig,
    time: &Time,
    arena: &Arena,
    paddle_height: f32,
) {
    if time.dt <= 0.0 {
        return;
    }
    let diff = target_center_y - paddle.center_y(paddle_height);
    let max_step = cfg.max_speed * time.dt;
    let delta = (diff * cfg.smoothing).clamp(-max_step, max_step);

    paddle.y = arena.clamp_paddle_y(paddle.y + delta, paddle_height);
    paddle.vel = delta / time.dt;
}

/// Drive both paddles one step according to their per-side policies.
pub fn drive_paddles(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    time: &Time,
    policy: &mut AutoplayState,
    rng: &mut GameRng,
) {
    // Snapshot the ball without holding borrows
    let ball = {
        let mut q = world.query::<&Ball>();
        q.iter().next().map(|(_e, b)| *b)
    };
    let ball = match ball {
        Some(b) => b,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let cfg = config.autoplay(paddle.side);
        let state = policy.side_mut(paddle.side);
        let approaching = ball.vel.x * paddle.side.direction() > 0.0;

        let predicted = match cfg.strategy {
            Strategy::AlwaysTrack => {
                predict_intercept_y(&ball, config.paddle_front_x(paddle.side), arena)
                    // Degenerate horizontal velocity: fall back to shadowing the ball
                    .unwrap_or(ball.pos.y)
            }
            Strategy::TrackWhenApproaching => {
                if approaching {
                    match predict_intercept_y(&ball, config.paddle_front_x(paddle.side), arena) {
                        Some(y) => y,
                        None => continue, // skip prediction this tick
                    }
                } else {
                    arena.height / 2.0
                }
            }
        };

        match cfg.jitter {
            crate::Jitter::EveryTick => state.noise = sample_noise(cfg, rng),
            crate::Jitter::PerApproach => {
                if approaching && !state.approaching {
                    state.noise = sample_noise(cfg, rng);
                }
            }
        }
        state.approaching = approaching;

        let target = compute_target(predicted, state.noise);
        step_paddle_toward(paddle, target, cfg, time, arena, config.paddle_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::{create_ball, create_paddle, Jitter, Side};

    #[test]
    fn test_predict_straight_line_returns_center() {
        let arena = Arena::default();
        let ball = Ball::new(arena.center(), Vec2::new(300.0, 0.0));

        let predicted = predict_intercept_y(&ball, 30.1, &arena).unwrap();
        assert!((predicted - arena.height / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_predict_degenerate_horizontal_velocity() {
        let arena = Arena::default();
        let ball = Ball::new(arena.center(), Vec2::new(0.0, 12.0));

        assert_eq!(predict_intercept_y(&ball, 30.1, &arena), None);
    }

    #[test]
    fn test_predict_folds_one_wall_bounce() {
        let arena = Arena::new(32.0, 24.0);
        // From (16, 20) heading down-right at 45°: without folding it would
        // reach y = 20 + 14 = 34 at x = 30; one bottom bounce mirrors it to 14.
        let ball = Ball::new(Vec2::new(16.0, 20.0), Vec2::new(12.0, 12.0));

        let predicted = predict_intercept_y(&ball, 30.0, &arena).unwrap();
        assert!((predicted - 14.0).abs() < 1e-3);
    }

    #[test]
    fn test_predict_result_always_in_bounds() {
        let arena = Arena::new(32.0, 24.0);
        // Steep trajectory crossing several walls before reaching the line
        let ball = Ball::new(Vec2::new(2.0, 1.0), Vec2::new(2.0, 11.8));

        let predicted = predict_intercept_y(&ball, 30.0, &arena).unwrap();
        assert!((0.0..=arena.height).contains(&predicted));
    }

    #[test]
    fn test_step_paddle_bounded_speed() {
        let arena = Arena::default();
        let cfg = AutoplayConfig {
            smoothing: 1.0,
            ..AutoplayConfig::default()
        };
        let mut paddle = Paddle::new(Side::Left, 10.0);
        let time = Time::new(0.0166, 0.0);

        // Target far below: movement must cap at max_speed * dt
        step_paddle_toward(&mut paddle, 100.0, &cfg, &time, &arena, 4.0);
        let moved = paddle.y - 10.0;
        assert!((moved - cfg.max_speed * time.dt).abs() < 1e-4);
    }

    #[test]
    fn test_step_paddle_clamps_to_arena() {
        let arena = Arena::default();
        let cfg = AutoplayConfig {
            max_speed: 1e6,
            smoothing: 1.0,
            ..AutoplayConfig::default()
        };
        let time = Time::new(1.0, 0.0);

        let mut paddle = Paddle::new(Side::Left, 10.0);
        step_paddle_toward(&mut paddle, 1000.0, &cfg, &time, &arena, 4.0);
        assert_eq!(paddle.y, arena.height - 4.0);

        step_paddle_toward(&mut paddle, -1000.0, &cfg, &time, &arena, 4.0);
        assert_eq!(paddle.y, 0.0);
    }

    #[test]
    fn test_step_paddle_zero_dt_is_noop() {
        let arena = Arena::default();
        let cfg = AutoplayConfig::default();
        let mut paddle = Paddle::new(Side::Left, 10.0);
        let time = Time::new(0.0, 0.0);

        step_paddle_toward(&mut paddle, 100.0, &cfg, &time, &arena, 4.0);
        assert_eq!(paddle.y, 10.0);
    }

    #[test]
    fn test_track_when_approaching_recenters_on_retreat() {
        let mut world = World::new();
        let arena = Arena::default();
        let mut config = Config::new();
        config.set_difficulty(Side::Left, 0.0);
        config.set_strategy(Side::Left, Strategy::TrackWhenApproaching);
        let mut policy = AutoplayState::new();
        let mut rng = GameRng::new(7);
        let time = Time::new(0.0166, 0.0);

        create_paddle(&mut world, Side::Left, 0.0);
        // Ball heading away from the left paddle
        create_ball(&mut world, arena.center(), Vec2::new(12.0, 0.0));

        for _ in 0..600 {
            drive_paddles(&mut world, &arena, &config, &time, &mut policy, &mut rng);
        }

        let mut q = world.query::<&Paddle>();
        let (_e, paddle) = q.iter().next().unwrap();
        let center = paddle.y + config.paddle_height / 2.0;
        assert!(
            (center - arena.height / 2.0).abs() < 0.5,
            "paddle should have recentered, center at {center}"
        );
    }

    #[test]
    fn test_always_track_chases_perfectly_with_zero_difficulty() {
        let mut world = World::new();
        let arena = Arena::default();
        let mut config = Config::new();
        config.set_difficulty(Side::Right, 0.0);
        config.set_strategy(Side::Right, Strategy::AlwaysTrack);
        let mut policy = AutoplayState::new();
        let mut rng = GameRng::new(7);
        let time = Time::new(0.0166, 0.0);

        create_paddle(&mut world, Side::Right, 0.0);
        // Straight horizontal ball toward the right paddle at mid-height
        create_ball(&mut world, Vec2::new(2.0, 12.0), Vec2::new(12.0, 0.0));

        for _ in 0..600 {
            drive_paddles(&mut world, &arena, &config, &time, &mut policy, &mut rng);
        }

        let mut q = world.query::<&Paddle>();
        let (_e, paddle) = q.iter().next().unwrap();
        let center = paddle.y + config.paddle_height / 2.0;
        assert!((center - 12.0).abs() < 0.5, "paddle center at {center}");
    }

    #[test]
    fn test_per_approach_jitter_is_stable_within_approach() {
        let mut world = World::new();
        let arena = Arena::default();
        let mut config = Config::new();
        config.set_difficulty(Side::Right, 1.0);
        config.set_jitter(Side::Right, Jitter::PerApproach);
        let mut policy = AutoplayState::new();
        let mut rng = GameRng::new(42);
        let time = Time::new(0.0166, 0.0);

        create_paddle(&mut world, Side::Right, 10.0);
        create_ball(&mut world, Vec2::new(2.0, 12.0), Vec2::new(12.0, 0.0));

        drive_paddles(&mut world, &arena, &config, &time, &mut policy, &mut rng);
        let first = policy.right.noise;
        for _ in 0..10 {
            drive_paddles(&mut world, &arena, &config, &time, &mut policy, &mut rng);
        }
        assert_eq!(policy.right.noise, first);
    }

    #[test]
    fn test_zero_difficulty_samples_no_noise() {
        let cfg = AutoplayConfig {
            difficulty: 0.0,
            ..AutoplayConfig::default()
        };
        let mut rng = GameRng::new(3);
        for _ in 0..16 {
            assert_eq!(sample_noise(&cfg, &mut rng), 0.0);
        }
    }
}
