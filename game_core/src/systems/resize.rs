use crate::{Ball, GameError, Paddle, Params, PlayField};
use hecs::World;

/// Largest 4:3 scale that fits the viewport.
///
/// A viewport wider than 4:3 is fitted by height, otherwise by width.
pub fn compute_unit(viewport_width: f32, viewport_height: f32) -> Result<f32, GameError> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(viewport_width) || !valid(viewport_height) {
        return Err(GameError::InvalidViewport {
            width: viewport_width,
            height: viewport_height,
        });
    }

    let unit = if viewport_width / Params::ASPECT_WIDTH >= viewport_height / Params::ASPECT_HEIGHT {
        viewport_height / Params::FIELD_HEIGHT
    } else {
        viewport_width / Params::FIELD_WIDTH
    };
    Ok(unit)
}

/// Scale every live spatial quantity from the field's current unit to `new_unit`.
///
/// Field dimensions are rebuilt from `new_unit` directly. Ball position,
/// velocity and radius and both paddle centers are multiplied by the ratio.
/// Returns the ratio applied.
pub fn rescale(world: &mut World, field: &mut PlayField, new_unit: f32) -> f32 {
    let ratio = new_unit / field.unit;
    *field = PlayField::from_unit(new_unit);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos *= ratio;
        ball.vel *= ratio;
        ball.radius *= ratio;
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y *= ratio;
    }
    ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config};
    use glam::Vec2;

    #[test]
    fn test_wide_viewport_fits_height() {
        assert_eq!(compute_unit(1920.0, 960.0), Ok(2.0));
    }

    #[test]
    fn test_tall_viewport_fits_width() {
        assert_eq!(compute_unit(320.0, 1000.0), Ok(0.5));
    }

    #[test]
    fn test_exact_aspect() {
        assert_eq!(compute_unit(1280.0, 960.0), Ok(2.0));
    }

    #[test]
    fn test_invalid_viewport() {
        assert!(matches!(
            compute_unit(0.0, 480.0),
            Err(GameError::InvalidViewport { .. })
        ));
        assert!(compute_unit(640.0, -1.0).is_err());
        assert!(compute_unit(f32::NAN, 480.0).is_err());
    }

    #[test]
    fn test_rescale_moves_everything() {
        let config = Config::new();
        let mut field = PlayField::default();
        let mut world = World::new();
        create_paddle(&mut world, Paddle::player(100.0));
        create_ball(
            &mut world,
            Ball::new(Vec2::new(300.0, 200.0), Vec2::new(2.0, -1.0), 5.0, &config),
        );

        let ratio = rescale(&mut world, &mut field, 2.0);

        assert_eq!(ratio, 2.0);
        assert_eq!(field, PlayField::from_unit(2.0));
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(600.0, 400.0));
            assert_eq!(ball.vel, Vec2::new(4.0, -2.0));
            assert_eq!(ball.radius, 10.0);
        }
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.y, 200.0);
        }
    }

    #[test]
    fn test_field_does_not_drift() {
        let mut field = PlayField::default();
        let mut world = World::new();
        for unit in [0.7, 1.3, 2.9, 0.41, 1.0] {
            rescale(&mut world, &mut field, unit);
        }
        assert_eq!(field, PlayField::from_unit(1.0));
    }
}
