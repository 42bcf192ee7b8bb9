use hecs::World;

use crate::{GameError, Paddle, PlayField, Side};

/// Move the human paddle to a pointer/touch y, if the whole paddle fits.
///
/// Out-of-range input leaves the paddle where it is; there is no clamping to
/// the nearest valid position.
pub fn set_from_pointer(paddle: &mut Paddle, field: &PlayField, y: f32) -> Result<(), GameError> {
    let half_height = field.paddle_height / 2.0;
    if y - half_height >= field.top() && y + half_height <= field.bottom() {
        paddle.y = y;
        Ok(())
    } else {
        let (min, max) = field.paddle_y_range();
        Err(GameError::InputOutOfRange { y, min, max })
    }
}

/// Apply a pointer or touch position to the player's paddle
pub fn apply_pointer(world: &mut World, field: &PlayField, y: f32) -> Result<(), GameError> {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            return set_from_pointer(paddle, field, y);
        }
    }
    Err(GameError::NotRunning)
}
