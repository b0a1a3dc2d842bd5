use glam::Vec2;
use hecs::World;

use crate::systems::ball::bounce_velocity;
use crate::{Aabb, Ball, Config, Events, Paddle};

/// Bounce the ball off paddle front faces.
///
/// A hit triggers when the ball's leading edge has crossed the front face
/// while the ball center is inside the paddle's vertical span (half-open:
/// `[paddle.y, paddle.y + height)`) and the ball is moving toward the paddle.
/// The ball is pushed just outside the face so it cannot tunnel or stick, and
/// the new velocity comes from the bounce-angle formula, keeping the speed
/// invariant exact.
pub fn resolve_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(crate::Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    let radius = config.ball_radius;
    let height = config.paddle_height;

    for (side, paddle_y) in paddles {
        let front_x = config.paddle_front_x(side);
        let rect = Aabb::from_top_left(
            Vec2::new(config.paddle_x(side), paddle_y),
            Vec2::new(config.paddle_width, height),
        );
        // Ball travels toward this side when the velocity sign matches
        let toward = side.direction();

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if ball.vel.x * toward <= 0.0 {
                continue;
            }
            // Broad phase; also rejects a ball already past the whole paddle
            if !rect.intersects_circle(ball.pos, radius) {
                continue;
            }
            if ball.pos.y < paddle_y || ball.pos.y >= paddle_y + height {
                continue;
            }
            let leading_edge = ball.pos.x + toward * radius;
            if (leading_edge - front_x) * toward < 0.0 {
                continue;
            }

            ball.pos.x = front_x - toward * radius;
            let hit_position = (ball.pos.y - (paddle_y + height / 2.0)) / (height / 2.0);
            ball.vel = bounce_velocity(-toward, hit_position, config.ball_speed);
            events.ball_hit_paddle = Some(side);
        }
    }
}
