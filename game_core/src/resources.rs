use crate::side::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Match state machine. `InProgress` is the steady state; the other two are
/// transient, surfaced through `Events` and consumed the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    #[default]
    InProgress,
    PointScored,
    MatchWon,
}

/// Events that occurred during this tick, cleared at the start of the next.
/// Scoring sides are the side that earned the point, not the exit edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub point_scored: Option<Side>,
    pub match_won: Option<Side>,
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> MatchPhase {
        if self.match_won.is_some() {
            MatchPhase::MatchWon
        } else if self.point_scored.is_some() {
            MatchPhase::PointScored
        } else {
            MatchPhase::InProgress
        }
    }
}

/// Per-side autoplay working state: the current noise sample and whether the
/// ball was approaching on the previous tick (so `Jitter::PerApproach` can
/// resample exactly once per approach).
#[derive(Debug, Clone, Copy, Default)]
pub struct SidePolicy {
    pub noise: f32,
    pub approaching: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AutoplayState {
    pub left: SidePolicy,
    pub right: SidePolicy,
}

impl AutoplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SidePolicy {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// A fresh serve invalidates any cached approach/noise state.
    pub fn reset(&mut self) {
        self.left = SidePolicy::default();
        self.right = SidePolicy::default();
    }
}
