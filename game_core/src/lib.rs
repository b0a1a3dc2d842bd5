pub mod arena;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod side;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use side::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run the deterministic Pong simulation for one frame.
///
/// The caller's dt is clamped to `MAX_DT` and advanced in `FIXED_DT`
/// micro-steps for stable physics. When `config.fixed_step` is set the
/// caller's dt is ignored and the constant step is used instead. A zero or
/// negative dt is a no-op.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    policy: &mut AutoplayState,
    rng: &mut GameRng,
) {
    // Events are transient: whatever the previous frame's consumers saw is gone
    events.clear();

    let frame_dt = config.fixed_step.unwrap_or(time.dt);
    if frame_dt <= 0.0 {
        return;
    }

    // Clamp dt to prevent large jumps
    let clamped_dt = frame_dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Autoplay drives the paddles toward their predicted intercepts
        drive_paddles(world, arena, config, &step_time, policy, rng);

        // 2. Move ball
        move_ball(world, &step_time);

        // 3. Wall bounces, then paddle bounces
        resolve_wall_collisions(world, arena, config, events);
        resolve_paddle_collisions(world, config, events);

        // 4. Scoring / match state machine (ball exited arena)
        check_scoring(world, arena, config, score, events, policy, rng);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// A complete self-playing game: world plus every resource `step` needs,
/// behind the small API the frame driver consumes. Single-threaded and
/// single-writer; all mutation happens inside `tick`.
pub struct Session {
    world: World,
    time: Time,
    arena: Arena,
    config: Config,
    score: Score,
    events: Events,
    policy: AutoplayState,
    rng: GameRng,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let paddle_y = (arena.height - config.paddle_height) / 2.0;
        create_paddle(&mut world, Side::Left, paddle_y);
        create_paddle(&mut world, Side::Right, paddle_y);

        let mut ball = Ball::new(arena.center(), Vec2::ZERO);
        ball.reset(&arena, config.ball_speed, &mut rng);
        world.spawn((ball,));

        Self {
            world,
            time: Time::new(0.0, 0.0),
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            policy: AutoplayState::new(),
            rng,
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.policy,
            &mut self.rng,
        );
    }

    /// Ball center and radius, for drawing
    pub fn ball(&self) -> (Vec2, f32) {
        let mut q = self.world.query::<&Ball>();
        let pos = q.iter().next().map(|(_e, b)| b.pos).unwrap_or_default();
        (pos, self.config.ball_radius)
    }

    /// Paddle top-left corner and size, for drawing
    pub fn paddle(&self, side: Side) -> (Vec2, Vec2) {
        let mut q = self.world.query::<&Paddle>();
        let y = q
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or_default();
        (
            Vec2::new(self.config.paddle_x(side), y),
            Vec2::new(self.config.paddle_width, self.config.paddle_height),
        )
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Transient notifications from the last tick
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn phase(&self) -> MatchPhase {
        self.events.phase()
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Callable at any time between ticks; the value is clamped to [0, 1]
    pub fn set_difficulty(&mut self, side: Side, value: f32) {
        self.config.set_difficulty(side, value);
    }

    pub fn set_strategy(&mut self, side: Side, strategy: Strategy) {
        self.config.set_strategy(side, strategy);
    }

    pub fn set_jitter(&mut self, side: Side, jitter: Jitter) {
        self.config.set_jitter(side, jitter);
    }
}
