use crate::params::Params;
use crate::side::Side;

/// How a paddle's autoplay decides where to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Predict and chase the interception point only while the ball is
    /// approaching; otherwise return to center.
    #[default]
    TrackWhenApproaching,
    /// Predict and chase on every tick, regardless of ball direction.
    AlwaysTrack,
}

/// When the autoplay aim noise is resampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Jitter {
    /// New noise sample every tick (twitchy).
    EveryTick,
    /// One sample per approach (smoother, more human-like).
    #[default]
    PerApproach,
}

/// Per-side autoplay policy parameters
#[derive(Debug, Clone, Copy)]
pub struct AutoplayConfig {
    pub strategy: Strategy,
    /// 0.0 = perfect play, 1.0 = maximum aim noise. Always in [0, 1].
    pub difficulty: f32,
    pub max_speed: f32,
    /// Fraction of the remaining distance covered per fixed step, in (0, 1].
    pub smoothing: f32,
    pub jitter: Jitter,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            difficulty: 0.3,
            max_speed: Params::PADDLE_SPEED,
            smoothing: Params::SMOOTHING_DEFAULT,
            jitter: Jitter::default(),
        }
    }
}

impl AutoplayConfig {
    /// Aim noise amplitude in world units
    pub fn error_margin(&self) -> f32 {
        self.difficulty * Params::ERROR_MARGIN_MAX
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub win_score: u8,
    /// When set, `step` ignores the caller's dt and advances by this constant.
    pub fixed_step: Option<f32>,
    pub autoplay_left: AutoplayConfig,
    pub autoplay_right: AutoplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
            fixed_step: None,
            autoplay_left: AutoplayConfig::default(),
            autoplay_right: AutoplayConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn autoplay(&self, side: Side) -> &AutoplayConfig {
        match side {
            Side::Left => &self.autoplay_left,
            Side::Right => &self.autoplay_right,
        }
    }

    pub fn autoplay_mut(&mut self, side: Side) -> &mut AutoplayConfig {
        match side {
            Side::Left => &mut self.autoplay_left,
            Side::Right => &mut self.autoplay_right,
        }
    }

    /// X of the paddle's back edge (top-left corner x)
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::PADDLE_X_INSET,
            Side::Right => self.arena_width - Params::PADDLE_X_INSET - self.paddle_width,
        }
    }

    /// X of the paddle face the ball bounces off
    pub fn paddle_front_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_x(side) + self.paddle_width,
            Side::Right => self.paddle_x(side),
        }
    }

    /// Clamp difficulty at the configuration boundary; invalid values never
    /// reach the simulation.
    pub fn set_difficulty(&mut self, side: Side, value: f32) {
        self.autoplay_mut(side).difficulty = value.clamp(0.0, 1.0);
    }

    pub fn set_strategy(&mut self, side: Side, strategy: Strategy) {
        self.autoplay_mut(side).strategy = strategy;
    }

    pub fn set_jitter(&mut self, side: Side, jitter: Jitter) {
        self.autoplay_mut(side).jitter = jitter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_x_symmetry() {
        let config = Config::new();
        let left_front = config.paddle_front_x(Side::Left);
        let right_front = config.paddle_front_x(Side::Right);
        assert!((left_front - (config.arena_width - right_front)).abs() < 1e-6);
    }

    #[test]
    fn test_set_difficulty_clamps() {
        let mut config = Config::new();
        config.set_difficulty(Side::Left, 2.5);
        assert_eq!(config.autoplay(Side::Left).difficulty, 1.0);
        config.set_difficulty(Side::Left, -0.5);
        assert_eq!(config.autoplay(Side::Left).difficulty, 0.0);
        config.set_difficulty(Side::Right, 0.4);
        assert_eq!(config.autoplay(Side::Right).difficulty, 0.4);
    }

    #[test]
    fn test_set_strategy_per_side() {
        let mut config = Config::new();
        config.set_strategy(Side::Right, Strategy::AlwaysTrack);
        assert_eq!(config.autoplay(Side::Right).strategy, Strategy::AlwaysTrack);
        assert_eq!(
            config.autoplay(Side::Left).strategy,
            Strategy::TrackWhenApproaching
        );
    }

    #[test]
    fn test_error_margin_zero_at_perfect_play() {
        let mut config = Config::new();
        config.set_difficulty(Side::Left, 0.0);
        assert_eq!(config.autoplay(Side::Left).error_margin(), 0.0);
    }
}
