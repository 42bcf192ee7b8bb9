/// Game tuning parameters for Pong
///
/// Spatial values are in field units at `unit = 1`; the live field multiplies
/// them by the current unit (see [`crate::PlayField`]).
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;
    pub const ASPECT_WIDTH: f32 = 4.0;
    pub const ASPECT_HEIGHT: f32 = 3.0;
    pub const FONT_SIZE: f32 = 16.0;
    pub const TOP_BOTTOM_BORDER: f32 = 24.0;
    pub const LEFT_RIGHT_BORDER: f32 = 64.0;

    // Center line
    pub const LINE_SIZE: f32 = 3.0;
    pub const LINE_DASH: f32 = 7.0;
    pub const LINE_GAP: f32 = 7.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 32.0;
    pub const CPU_SPEED: f32 = 2.0;
    pub const CPU_DEAD_ZONE: f32 = 20.0; // absolute, not unit-scaled

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SERVE_SPEED: f32 = 1.0;
    pub const BALL_SERVE_VY_RANGE: f32 = 2.0; // vy drawn from [-2, 2] units
    pub const BALL_SPEED_MULTIPLIER: f32 = 0.2; // added to |vx| per paddle hit
    pub const BALL_MAX_SPEED: f32 = 5.0;
    pub const MAX_VERTICAL_DEFLECTION: f32 = 5.0;

    // Loop
    pub const TICK_DELAY_MS: u32 = 7;
    pub const MS_PER_DELTA_UNIT: f64 = 10.0;
    pub const STALLED_DELTA_UNITS: f32 = 1.0; // used when the clock did not advance
    pub const HEARTBEAT_TICKS: u64 = 600;
}
