use crate::geometry::Rect;
use crate::{Params, Side};
use glam::Vec2;

/// Play field dimensions, all derived from a single `unit`.
///
/// `unit` is the only source of scale. Every other field is `unit × constant`
/// and is recomputed from it, never accumulated, so repeated resizes cannot
/// drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub unit: f32,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub top_bottom_border: f32,
    pub left_right_border: f32,
    pub line_size: f32,
    pub line_dash: f32,
    pub line_gap: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
}

impl PlayField {
    pub fn from_unit(unit: f32) -> Self {
        Self {
            unit,
            width: Params::FIELD_WIDTH * unit,
            height: Params::FIELD_HEIGHT * unit,
            font_size: Params::FONT_SIZE * unit,
            top_bottom_border: Params::TOP_BOTTOM_BORDER * unit,
            left_right_border: Params::LEFT_RIGHT_BORDER * unit,
            line_size: Params::LINE_SIZE * unit,
            line_dash: Params::LINE_DASH * unit,
            line_gap: Params::LINE_GAP * unit,
            paddle_width: Params::PADDLE_WIDTH * unit,
            paddle_height: Params::PADDLE_HEIGHT * unit,
        }
    }

    /// Top wall
    pub fn top(&self) -> f32 {
        self.top_bottom_border
    }

    /// Bottom wall
    pub fn bottom(&self) -> f32 {
        self.height - self.top_bottom_border
    }

    /// Left scoring edge (behind the computer paddle)
    pub fn left(&self) -> f32 {
        self.left_right_border
    }

    /// Right scoring edge (behind the player paddle)
    pub fn right(&self) -> f32 {
        self.width - self.left_right_border
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle column: computer on the left, player on the right
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Computer => self.left_right_border * 2.0,
            Side::Player => self.width - self.left_right_border * 2.0,
        }
    }

    pub fn paddle_rect(&self, side: Side, y: f32) -> Rect {
        Rect::from_center_size(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Range of paddle centers that keep the paddle between the walls
    pub fn paddle_y_range(&self) -> (f32, f32) {
        let half_height = self.paddle_height / 2.0;
        (self.top() + half_height, self.bottom() - half_height)
    }

    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let (min, max) = self.paddle_y_range();
        y.clamp(min, max)
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self::from_unit(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_one_matches_base_dimensions() {
        let field = PlayField::default();
        assert_eq!(field.width, 640.0);
        assert_eq!(field.height, 480.0);
        assert_eq!(field.top(), 24.0);
        assert_eq!(field.bottom(), 456.0);
        assert_eq!(field.left(), 64.0);
        assert_eq!(field.right(), 576.0);
        assert_eq!(field.center(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_every_quantity_scales_with_unit() {
        let base = PlayField::from_unit(1.0);
        let scaled = PlayField::from_unit(1.5);
        assert_eq!(scaled.width, base.width * 1.5);
        assert_eq!(scaled.font_size, base.font_size * 1.5);
        assert_eq!(scaled.line_dash, base.line_dash * 1.5);
        assert_eq!(scaled.paddle_height, base.paddle_height * 1.5);
        assert_eq!(scaled.left_right_border, base.left_right_border * 1.5);
    }

    #[test]
    fn test_paddle_columns() {
        let field = PlayField::default();
        assert_eq!(field.paddle_x(Side::Computer), 128.0);
        assert_eq!(field.paddle_x(Side::Player), 512.0);
    }

    #[test]
    fn test_paddle_y_range_and_clamp() {
        let field = PlayField::default();
        assert_eq!(field.paddle_y_range(), (40.0, 440.0));
        assert_eq!(field.clamp_paddle_y(0.0), 40.0);
        assert_eq!(field.clamp_paddle_y(1000.0), 440.0);
        assert_eq!(field.clamp_paddle_y(240.0), 240.0);
    }
}
