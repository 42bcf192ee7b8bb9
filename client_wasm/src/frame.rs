//! Frame building
//!
//! Collects the core's fill calls into per-shape instance lists that the
//! renderer uploads in one write per mesh.

use game_core::geometry::Rect;
use game_core::render::{Color, DrawSurface, BACKGROUND_COLOR};
use glam::Vec2;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

/// One frame's worth of draw calls
#[derive(Debug, Clone)]
pub struct Frame {
    pub size: (f32, f32),
    pub clear_color: Color,
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            size: (0.0, 0.0),
            clear_color: BACKGROUND_COLOR,
            rects: Vec::new(),
            circles: Vec::new(),
        }
    }
}

/// Canvas and surface size in whole pixels for a field in CSS pixels
pub fn surface_size(field_size: (f32, f32)) -> (u32, u32) {
    let px = |v: f32| v.round().max(1.0) as u32;
    (px(field_size.0), px(field_size.1))
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for Frame {
    fn clear(&mut self, width: f32, height: f32, color: Color) {
        self.size = (width, height);
        self.clear_color = color;
        self.rects.clear();
        self.circles.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let center = rect.center();
        let size = rect.size();
        self.rects.push(InstanceData {
            transform: [center.x, center.y, size.x, size.y],
            tint: color,
        });
    }

    // Circle mesh has unit diameter
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let diameter = radius * 2.0;
        self.circles.push(InstanceData {
            transform: [center.x, center.y, diameter, diameter],
            tint: color,
        });
    }
}
