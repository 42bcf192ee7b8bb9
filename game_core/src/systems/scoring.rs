use crate::{Ball, Config, Events, GameRng, Paddle, PlayField, ScoreEvent, Side};
use hecs::World;

/// Which side wins the point, if the ball has reached a scoring edge.
///
/// Reaching the right edge (behind the player) is a point for the
/// computer, reaching the left edge a point for the player.
pub fn scoring_side(ball: &Ball, field: &PlayField) -> Option<Side> {
    if ball.pos.x + ball.radius >= field.right() {
        Some(Side::Computer)
    } else if ball.pos.x - ball.radius <= field.left() {
        Some(Side::Player)
    } else {
        None
    }
}

/// Re-serve from the center toward the side that lost the point
pub fn serve_after_point(
    ball: &mut Ball,
    winner: Side,
    field: &PlayField,
    config: &Config,
    rng: &mut GameRng,
) {
    ball.reset(field, config, rng);
    let speed = config.ball_serve_speed * field.unit;
    ball.vel.x = match winner {
        Side::Computer => -speed,
        Side::Player => speed,
    };
}

/// Check if ball reached a scoring edge
pub fn check_scoring(
    world: &mut World,
    field: &PlayField,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let winner = {
        let mut ball_query = world.query::<&mut Ball>();
        let Some((_e, ball)) = ball_query.iter().next() else {
            return;
        };
        let Some(winner) = scoring_side(ball, field) else {
            return;
        };
        serve_after_point(ball, winner, field, config, rng);
        winner
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == winner {
            paddle.score += 1;
            events.scored = Some(ScoreEvent {
                winner,
                score: paddle.score,
            });
        }
    }
}
