use crate::{Config, GameRng, PlayField};
use glam::Vec2;
use rand::Rng;

/// Which paddle: the CPU defends the left edge, the human the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Computer,
    Player,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Computer => Side::Player,
            Side::Player => Side::Computer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Computer => "computer",
            Side::Player => "player",
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // center
    pub score: u32,
    pub speed: Option<f32>, // CPU only
}

impl Paddle {
    pub fn player(y: f32) -> Self {
        Self {
            side: Side::Player,
            y,
            score: 0,
            speed: None,
        }
    }

    pub fn computer(y: f32, speed: f32) -> Self {
        Self {
            side: Side::Computer,
            y,
            score: 0,
            speed: Some(speed),
        }
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Paddle hits since the game started. Informational only.
    pub bounce_count: u32,
    pub speed_multiplier: f32,
    pub max_speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, config: &Config) -> Self {
        Self {
            pos,
            vel,
            radius,
            bounce_count: 0,
            speed_multiplier: config.ball_speed_multiplier,
            max_speed: config.ball_max_speed,
        }
    }

    /// Opening serve: center of the field, coin-flip horizontal direction
    pub fn serve(field: &PlayField, config: &Config, rng: &mut GameRng) -> Self {
        let radius = crate::Params::BALL_RADIUS * field.unit;
        let mut ball = Self::new(field.center(), Vec2::ZERO, radius, config);
        ball.reset(field, config, rng);

        let toward_player = rng.0.gen_bool(0.5);
        let speed = config.ball_serve_speed * field.unit;
        ball.vel.x = if toward_player { speed } else { -speed };
        ball
    }

    /// Back to center with a fresh vertical velocity; `vel.x` is left to the caller
    pub fn reset(&mut self, field: &PlayField, config: &Config, rng: &mut GameRng) {
        self.pos = field.center();
        let range = config.ball_serve_vy_range * field.unit;
        self.vel.y = rng.0.gen_range(-range..=range);
    }
}
