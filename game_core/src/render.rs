//! Draw contract between the simulation and a rendering backend.
//!
//! The core never draws directly. It walks the world once per frame and
//! issues fill calls against a [`DrawSurface`], which the host implements
//! (the browser client batches them into GPU instances).

use crate::geometry::Rect;
use crate::{Ball, Paddle, PlayField, Side};
use glam::Vec2;
use hecs::World;

/// Linear RGBA
pub type Color = [f32; 4];

pub const BACKGROUND_COLOR: Color = [0.0, 0.0, 0.0, 1.0];
pub const FOREGROUND_COLOR: Color = [1.0, 1.0, 1.0, 1.0];

/// Something the game can be drawn onto
pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Dashes of the center line, top border downwards
pub fn center_line(field: &PlayField) -> Vec<Rect> {
    let mut dashes = Vec::new();
    let step = field.line_dash + field.line_gap;
    if step <= 0.0 {
        return dashes;
    }

    let x = field.width / 2.0 - field.line_size / 2.0;
    let mut y = field.top();
    while y < field.bottom() {
        dashes.push(Rect::from_origin_size(
            Vec2::new(x, y),
            Vec2::new(field.line_size, field.line_dash),
        ));
        y += step;
    }
    dashes
}

/// Draw one frame: background, center line, computer paddle, player paddle, ball
pub fn render<S: DrawSurface + ?Sized>(world: &World, field: &PlayField, surface: &mut S) {
    surface.clear(field.width, field.height, BACKGROUND_COLOR);

    for dash in center_line(field) {
        surface.fill_rect(dash, FOREGROUND_COLOR);
    }

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| match paddle.side {
        Side::Computer => 0,
        Side::Player => 1,
    });
    for paddle in paddles {
        surface.fill_rect(field.paddle_rect(paddle.side, paddle.y), FOREGROUND_COLOR);
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos, ball.radius, FOREGROUND_COLOR);
    }
}
