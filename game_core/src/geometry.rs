use glam::Vec2;

/// Axis-aligned rectangle in field coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Build from a top-left corner and a size, the way fill calls take them
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Grow by `dx` on the left and right and by `dy` on the top and bottom
    pub fn expand(&self, dx: f32, dy: f32) -> Self {
        let margin = Vec2::new(dx, dy);
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            Vec2::new(self.min.x, self.max.y),
            self.max,
        ]
    }
}

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    rect.contains(point)
}

/// Circle/rectangle overlap, touching counts as overlap.
///
/// The circle hits when its center lies in the rectangle widened by `radius`
/// horizontally, or heightened by `radius` vertically, or within `radius` of
/// a corner. The three regions together form the rectangle's rounded
/// Minkowski sum with the circle, so edge and corner contacts are both
/// covered.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    point_in_rect(center, &rect.expand(radius, 0.0))
        || point_in_rect(center, &rect.expand(0.0, radius))
        || rect
            .corners()
            .iter()
            .any(|corner| distance(center, *corner) <= radius)
}
