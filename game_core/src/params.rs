/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 32.0;
    pub const ARENA_HEIGHT: f32 = 24.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.8;
    pub const PADDLE_HEIGHT: f32 = 4.0;
    pub const PADDLE_X_INSET: f32 = 1.1; // distance from side wall to paddle back edge
    pub const PADDLE_SPEED: f32 = 18.0; // units per second

    // Ball
    pub const BALL_RADIUS: f32 = 0.5;
    pub const BALL_SPEED: f32 = 12.0; // constant magnitude, re-enforced after every bounce
    pub const BOUNCE_ANGLE_MAX: f32 = std::f32::consts::FRAC_PI_4; // ±45° off horizontal

    // Autoplay
    pub const ERROR_MARGIN_MAX: f32 = 6.0; // aim noise amplitude at difficulty 1.0
    pub const SMOOTHING_DEFAULT: f32 = 0.25;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
