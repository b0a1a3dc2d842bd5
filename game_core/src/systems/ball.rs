use glam::Vec2;
use hecs::World;

use crate::{Arena, Ball, Config, Events, Time};

/// Velocity for a ball leaving a paddle (or a serve). This is the sole
/// authority for ball speed: `hit_position` in [-1, 1] maps to a bounce angle
/// bounded to ±45°, and the magnitude is exactly `speed`.
pub fn bounce_velocity(direction: f32, hit_position: f32, speed: f32) -> Vec2 {
    let angle = hit_position.clamp(-1.0, 1.0) * crate::params::Params::BOUNCE_ANGLE_MAX;
    Vec2::new(direction.signum() * angle.cos() * speed, angle.sin() * speed)
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

/// Bounce the ball off the top and bottom walls. The position is clamped so
/// the ball edge sits exactly on the boundary, and the velocity is
/// renormalized to the configured speed so repeated reflections cannot drift.
pub fn resolve_wall_collisions(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - radius <= 0.0 {
            ball.pos.y = radius;
            ball.vel.y = ball.vel.y.abs();
        } else if ball.pos.y + radius >= arena.height {
            ball.pos.y = arena.height - radius;
            ball.vel.y = -ball.vel.y.abs();
        } else {
            continue;
        }
        let renormalized = ball.vel.normalize_or_zero() * config.ball_speed;
        if renormalized != Vec2::ZERO {
            ball.vel = renormalized;
        }
        events.ball_hit_wall = true;
    }
}
