pub mod components;
pub mod config;
pub mod error;
pub mod field;
pub mod game;
pub mod game_loop;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use game::*;
pub use game_loop::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// The order is fixed: the CPU paddle moves, then the ball is bounced off
/// walls and paddles, then scoring is checked against the position from the
/// previous tick, and only then is the ball integrated.
pub fn step(
    world: &mut World,
    time: &Time,
    field: &PlayField,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. CPU paddle tracks the ball
    move_computer(world, time, field, config);

    // 2. Walls, then player paddle, then computer paddle
    check_collisions(world, field, config, events);

    // 3. Ball reached a scoring edge
    check_scoring(world, field, config, events, rng);

    // 4. Integrate
    move_ball(world, time);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
