use crate::geometry::circle_intersects_rect;
use crate::{Ball, Config, Events, Paddle, PlayField, Side};
use hecs::World;

/// Bounce the ball off the top or bottom wall.
///
/// Returns true if the ball was out of bounds. A ball that is already
/// clamped against a wall is left untouched, so calling this twice in the
/// same tick is a no-op the second time.
pub fn resolve_wall_bounce(ball: &mut Ball, field: &PlayField) -> bool {
    let min_y = field.top() + ball.radius;
    let max_y = field.bottom() - ball.radius;

    if ball.pos.y < min_y {
        ball.pos.y = min_y;
    } else if ball.pos.y > max_y {
        ball.pos.y = max_y;
    } else {
        return false;
    }
    ball.vel.y = -ball.vel.y;
    true
}

/// Steer the rebound by where the ball met the paddle, then send it back.
///
/// A ball above the paddle center is pushed up, below it is pushed down,
/// and a level hit keeps its vertical speed.
pub fn redirect(ball: &mut Ball, paddle_y: f32, field: &PlayField, config: &Config) {
    let deflection = config.max_vertical_deflection / field.paddle_height;
    if paddle_y > ball.pos.y {
        ball.vel.y -= (paddle_y - ball.pos.y) * deflection;
    } else if paddle_y < ball.pos.y {
        ball.vel.y += (ball.pos.y - paddle_y) * deflection;
    }
    ball.vel.x = -ball.vel.x;
}

/// Resolve a hit between the ball and one paddle.
///
/// Only a ball travelling toward the paddle can hit it; this stops a ball
/// still overlapping the paddle after a rebound from bouncing back again.
/// A receding ball that overlaps the paddle is therefore not a hit.
/// On a hit the horizontal speed grows by `speed_multiplier`, capped at
/// `max_speed`, before the rebound is applied.
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    field: &PlayField,
    config: &Config,
) -> bool {
    let approaching = match paddle.side {
        Side::Computer => ball.vel.x < 0.0,
        Side::Player => ball.vel.x > 0.0,
    };
    if !approaching {
        return false;
    }

    let rect = field.paddle_rect(paddle.side, paddle.y);
    if !circle_intersects_rect(ball.pos, ball.radius, &rect) {
        return false;
    }

    let speed = (ball.vel.x.abs() + ball.speed_multiplier).min(ball.max_speed);
    ball.vel.x = speed.copysign(ball.vel.x);
    redirect(ball, paddle.y, field, config);
    ball.bounce_count += 1;
    true
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, field: &PlayField, config: &Config, events: &mut Events) {
    // Player first, then computer; at most one paddle can register per tick
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| match paddle.side {
        Side::Player => 0,
        Side::Computer => 1,
    });

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if resolve_wall_bounce(ball, field) {
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if resolve_paddle_collision(ball, paddle, field, config) {
                events.ball_hit_paddle = Some(paddle.side);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 5.0, &Config::new())
    }

    #[test]
    fn test_wall_bounce_top() {
        let field = PlayField::default();
        let mut ball = ball_at(320.0, 26.0, 1.0, -2.0);
        assert!(resolve_wall_bounce(&mut ball, &field));
        assert_eq!(ball.pos.y, 29.0);
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let field = PlayField::default();
        let mut ball = ball_at(320.0, 455.0, 1.0, 3.0);
        assert!(resolve_wall_bounce(&mut ball, &field));
        assert_eq!(ball.pos.y, 451.0);
        assert_eq!(ball.vel.y, -3.0);
    }

    #[test]
    fn test_wall_bounce_is_idempotent() {
        let field = PlayField::from_unit(1.37);
        let mut ball = ball_at(320.0, 10.0, 1.0, -2.0);
        ball.radius = 5.0 * 1.37;
        assert!(resolve_wall_bounce(&mut ball, &field));
        let after_first = ball;
        assert!(!resolve_wall_bounce(&mut ball, &field));
        assert_eq!(ball, after_first);
    }

    #[test]
    fn test_ball_inside_walls_untouched() {
        let field = PlayField::default();
        let mut ball = ball_at(320.0, 240.0, 1.0, -2.0);
        assert!(!resolve_wall_bounce(&mut ball, &field));
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_player_paddle_hit_speeds_up_and_reverses() {
        let field = PlayField::default();
        let config = Config::new();
        let paddle = Paddle::player(240.0);
        let mut ball = ball_at(505.0, 240.0, 2.0, 0.0);

        assert!(resolve_paddle_collision(&mut ball, &paddle, &field, &config));
        assert!((ball.vel.x - -2.2).abs() < 1e-6);
        assert_eq!(ball.vel.y, 0.0, "level hit keeps vy");
        assert_eq!(ball.bounce_count, 1);
    }

    #[test]
    fn test_computer_paddle_hit_speeds_up_and_reverses() {
        let field = PlayField::default();
        let config = Config::new();
        let paddle = Paddle::computer(240.0, 2.0);
        let mut ball = ball_at(136.0, 240.0, -2.0, 0.0);

        assert!(resolve_paddle_collision(&mut ball, &paddle, &field, &config));
        assert!((ball.vel.x - 2.2).abs() < 1e-6);
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_ball_short_of_paddle_misses() {
        let field = PlayField::default();
        let config = Config::new();
        let paddle = Paddle::computer(240.0, 2.0);
        let mut ball = ball_at(138.0, 240.0, -2.0, 0.0);
        assert!(!resolve_paddle_collision(&mut ball, &paddle, &field, &config));
        assert_eq!(ball.vel.x, -2.0);
    }

    #[test]
    fn test_receding_ball_is_ignored() {
        let field = PlayField::default();
        let config = Config::new();
        let paddle = Paddle::player(240.0);
        let mut ball = ball_at(510.0, 240.0, -2.2, 0.0);
        assert!(!resolve_paddle_collision(&mut ball, &paddle, &field, &config));
        assert_eq!(ball.vel.x, -2.2);
    }

    #[test]
    fn test_ball_leaving_computer_paddle_is_not_a_hit() {
        let field = PlayField::default();
        let config = Config::new();
        let paddle = Paddle::computer(240.0, config.cpu_speed);
        let mut ball = ball_at(136.0, 240.0, 2.0, 0.0);
        assert!(!resolve_paddle_collision(&mut ball, &paddle, &field, &config));
        assert_eq!(ball.vel.x, 2.0);
        assert_eq!(ball.bounce_count, 0);
    }

    #[test]
    fn test_speed_is_capped() {
        let field = PlayField::default();
        let config = Config::new();
        let paddle = Paddle::player(240.0);
        let mut ball = ball_at(505.0, 240.0, 4.9, 0.0);
        assert!(resolve_paddle_collision(&mut ball, &paddle, &field, &config));
        assert_eq!(ball.vel.x, -5.0);
    }

    #[test]
    fn test_hit_above_center_deflects_up() {
        let field = PlayField::default();
        let config = Config::new();
        let paddle = Paddle::player(240.0);
        // 8 above the center: vy -= 8/32 * 5
        let mut ball = ball_at(505.0, 232.0, 2.0, 0.0);
        assert!(resolve_paddle_collision(&mut ball, &paddle, &field, &config));
        assert_eq!(ball.vel.y, -1.25);
    }

    #[test]
    fn test_hit_below_center_deflects_down() {
        let field = PlayField::default();
        let config = Config::new();
        let paddle = Paddle::computer(240.0, 2.0);
        let mut ball = ball_at(136.0, 256.0, -2.0, 1.0);
        assert!(resolve_paddle_collision(&mut ball, &paddle, &field, &config));
        assert_eq!(ball.vel.y, 3.5);
    }

    #[test]
    fn test_check_collisions_records_events() {
        let field = PlayField::default();
        let config = Config::new();
        let mut events = Events::new();
        let mut world = World::new();
        create_paddle(&mut world, Paddle::computer(240.0, 2.0));
        create_paddle(&mut world, Paddle::player(240.0));
        create_ball(&mut world, ball_at(506.0, 240.0, 2.0, 0.0));

        check_collisions(&mut world, &field, &config, &mut events);

        assert_eq!(events.ball_hit_paddle, Some(Side::Player));
        assert!(!events.ball_hit_wall);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(ball.vel.x < 0.0);
        }
    }

    #[test]
    fn test_check_collisions_wall_and_paddle_same_tick() {
        let field = PlayField::default();
        let config = Config::new();
        let mut events = Events::new();
        let mut world = World::new();
        create_paddle(&mut world, Paddle::computer(40.0, 2.0));
        create_ball(&mut world, ball_at(133.0, 27.0, -2.0, -1.0));

        check_collisions(&mut world, &field, &config, &mut events);

        assert!(events.ball_hit_wall);
        assert_eq!(events.ball_hit_paddle, Some(Side::Computer));
    }
}
