use glam::Vec2;

use crate::arena::Arena;
use crate::side::Side;
use crate::GameRng;

/// Paddle component. `y` is the top edge; x is fixed per side (see `Config::paddle_x`).
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
    pub vel: f32, // vertical velocity of the last movement, units/s
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y, vel: 0.0 }
    }

    pub fn center_y(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }
}

/// Ball component. `vel.length()` stays at the configured ball speed; every
/// direction change goes through `bounce_velocity` or renormalizes.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from center: random horizontal direction, random angle within
    /// ±45° of horizontal. Routed through the bounce formula so the speed
    /// invariant holds immediately.
    pub fn reset(&mut self, arena: &Arena, speed: f32, rng: &mut GameRng) {
        use rand::Rng;
        self.pos = arena.center();
        let toward: Side = rng.0.gen();
        let offset: f32 = rng.0.gen_range(-1.0..1.0);
        self.vel = crate::systems::bounce_velocity(toward.direction(), offset, speed);
    }
}
