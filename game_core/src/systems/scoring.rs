use hecs::World;

use crate::{Arena, AutoplayState, Ball, Config, Events, GameRng, Score, Side};

/// Which side wall the ball has fully exited, if any. Side effect-free; the
/// caller awards the point to the opposite side.
pub fn detect_exit(ball: &Ball, radius: f32, arena: &Arena) -> Option<Side> {
    if ball.pos.x + radius < 0.0 {
        Some(Side::Left)
    } else if ball.pos.x - radius > arena.width {
        Some(Side::Right)
    } else {
        None
    }
}

/// Award points for balls leaving the arena and run the match state machine:
/// a point for the opponent of the exit side, a match win and score reset at
/// the threshold, and a fresh serve either way.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    policy: &mut AutoplayState,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let exit = match detect_exit(ball, config.ball_radius, arena) {
            Some(side) => side,
            None => continue,
        };

        let scorer = !exit;
        score.increment(scorer);

        if score.has_winner(config.win_score) == Some(scorer) {
            events.match_won = Some(scorer);
            score.reset();
        } else {
            events.point_scored = Some(scorer);
        }

        ball.reset(arena, config.ball_speed, rng);
        policy.reset();
    }
}
