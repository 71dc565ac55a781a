// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new AABB, swapping coordinates so that `min <= max` on both axes.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Aabb {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner, corner + size)
    }

    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Aabb { min: *first, max: *first };
        for point in rest {
            aabb.min.x = aabb.min.x.min(point.x);
            aabb.min.y = aabb.min.y.min(point.y);
            aabb.max.x = aabb.max.x.max(point.x);
            aabb.max.y = aabb.max.y.max(point.y);
        }
        Some(aabb)
    }

    /// Checks if this AABB overlaps with another AABB.
    /// Boxes that only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// A box with the same center and each extent multiplied by `ratio`.
    pub fn scaled_about_center(&self, ratio: f64) -> Self {
        Self::from_center_half_extents(self.center(), self.size() * (ratio / 2.0))
    }

    /// Merges another AABB into this one, expanding this AABB to contain both.
    pub fn merge(&mut self, other: &Aabb) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }
}
