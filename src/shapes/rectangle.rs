use crate::collision::Aabb;
use crate::error::{CollisionError, Result};
use crate::math::{Transform, Vec2};

/// An axis-aligned rectangle. Cannot be rotated; use a `Polygon` for rotating boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    corner: Vec2,
    size: Vec2,
}

impl Rectangle {
    /// Creates a rectangle from its minimum corner and its extents.
    ///
    /// Both extents must be finite and strictly positive.
    pub fn new(corner: Vec2, size: Vec2) -> Result<Self> {
        if !corner.is_finite() || !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(CollisionError::InvalidShapeParameters(format!(
                "rectangle extents must be positive, got {}x{}",
                size.x, size.y
            )));
        }
        Ok(Self { corner, size })
    }

    /// Covers the scaled extents of `transform`, ignoring its angle.
    pub fn from_transform(transform: &Transform) -> Result<Self> {
        Self::new(transform.corner(), transform.scaled_size())
    }

    pub fn corner(&self) -> Vec2 {
        self.corner
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        self.corner + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.corner = center - self.size / 2.0;
    }

    pub fn corners(&self) -> [Vec2; 4] {
        let Vec2 { x, y } = self.corner;
        [
            Vec2::new(x, y),
            Vec2::new(x + self.size.x, y),
            Vec2::new(x, y + self.size.y),
            Vec2::new(x + self.size.x, y + self.size.y),
        ]
    }

    /// Corner farthest along `direction`. Ties keep the earliest corner.
    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        let corners = self.corners();
        let mut best = corners[0];
        let mut best_dot = best.dot(direction);
        for corner in &corners[1..] {
            let dot = corner.dot(direction);
            if dot > best_dot {
                best_dot = dot;
                best = *corner;
            }
        }
        best
    }

    /// Exact: the rectangle is its own covering and inner box.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_corner_size(self.corner, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_new_rejects_degenerate_size() {
        assert!(Rectangle::new(Vec2::ZERO, Vec2::new(1.0, 1.0)).is_ok());
        assert!(matches!(
            Rectangle::new(Vec2::ZERO, Vec2::new(0.0, 1.0)),
            Err(CollisionError::InvalidShapeParameters(_))
        ));
        assert!(Rectangle::new(Vec2::ZERO, Vec2::new(2.0, -1.0)).is_err());
        assert!(Rectangle::new(Vec2::ZERO, Vec2::new(f64::INFINITY, 1.0)).is_err());
    }

    #[test]
    fn test_rectangle_from_transform() {
        let transform = Transform::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 4.0), Vec2::new(1.0, 2.0), 0.0);
        let rect = Rectangle::from_transform(&transform).unwrap();
        assert_eq!(rect.corner(), Vec2::new(0.0, 1.0));
        assert_eq!(rect.size(), Vec2::new(10.0, 8.0));
        assert_eq!(rect.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_rectangle_set_center_keeps_size() {
        let mut rect = Rectangle::new(Vec2::ZERO, Vec2::new(10.0, 10.0)).unwrap();
        rect.set_center(Vec2::new(20.0, -5.0));
        assert_eq!(rect.center(), Vec2::new(20.0, -5.0));
        assert_eq!(rect.corner(), Vec2::new(15.0, -10.0));
        assert_eq!(rect.size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_rectangle_support_point() {
        let rect = Rectangle::new(Vec2::ZERO, Vec2::new(10.0, 5.0)).unwrap();
        assert_eq!(rect.support_point(Vec2::new(1.0, 1.0)), Vec2::new(10.0, 5.0));
        assert_eq!(rect.support_point(Vec2::new(-1.0, 0.2)), Vec2::new(0.0, 5.0));
        assert_eq!(rect.support_point(Vec2::new(0.3, -1.0)), Vec2::new(10.0, 0.0));
        assert_eq!(rect.support_point(Vec2::new(-1.0, -1.0)), Vec2::ZERO);
    }

    #[test]
    fn test_rectangle_bounding_box_is_exact() {
        let rect = Rectangle::new(Vec2::new(-2.0, 3.0), Vec2::new(4.0, 1.0)).unwrap();
        let aabb = rect.bounding_box();
        assert_eq!(aabb.min, Vec2::new(-2.0, 3.0));
        assert_eq!(aabb.max, Vec2::new(2.0, 4.0));
    }
}
