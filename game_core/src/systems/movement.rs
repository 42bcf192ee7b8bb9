use crate::{Ball, Config, Paddle, PlayField, Side, Time};
use hecs::World;

/// Steer the CPU paddle toward the ball.
///
/// The paddle only moves when the ball is more than `cpu_dead_zone` away
/// from its center, and never past the walls.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, field: &PlayField, config: &Config, dt: f32) {
    let Some(speed) = paddle.speed else {
        return;
    };
    let half_height = field.paddle_height / 2.0;
    let step = speed * dt;

    if paddle.y + config.cpu_dead_zone < ball_y && paddle.y + half_height <= field.bottom() {
        paddle.y = field.clamp_paddle_y(paddle.y + step);
    } else if paddle.y - config.cpu_dead_zone > ball_y && paddle.y - half_height >= field.top() {
        paddle.y = field.clamp_paddle_y(paddle.y - step);
    }
}

/// Integrate ball position over `dt` delta units
pub fn advance(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}

/// Run the CPU tracking heuristic for the computer paddle
pub fn move_computer(world: &mut World, time: &Time, field: &PlayField, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Computer {
            track_ball(paddle, ball_y, field, config, time.dt);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        advance(ball, time.dt);
    }
}
