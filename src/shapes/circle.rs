use crate::collision::Aabb;
use crate::error::{CollisionError, Result};
use crate::math::{Transform, Vec2};
use std::f64::consts::SQRT_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Result<Self> {
        validate_radius(radius)?;
        Ok(Self { center, radius })
    }

    /// Builds the circle inscribed in a square transform (radius = half the scaled width).
    pub fn from_transform(transform: &Transform) -> Result<Self> {
        let mut circle = Self {
            center: transform.center,
            radius: 0.0,
        };
        circle.set_radius_from_transform(transform)?;
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    pub fn set_radius_from_transform(&mut self, transform: &Transform) -> Result<()> {
        let size = transform.scaled_size();
        if size.x != size.y {
            return Err(CollisionError::InvalidShapeParameters(format!(
                "circle needs a square transform, got {}x{}",
                size.x, size.y
            )));
        }
        self.set_radius(size.x / 2.0)
    }

    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        self.center + direction.normalize() * self.radius
    }

    pub fn covering_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, Vec2::new(self.radius, self.radius))
    }

    /// The inscribed square, side `r * sqrt(2)`.
    pub fn inner_box(&self) -> Aabb {
        let half = self.radius / SQRT_2;
        Aabb::from_center_half_extents(self.center, Vec2::new(half, half))
    }
}

fn validate_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(CollisionError::InvalidShapeParameters(format!(
            "radius must be positive, got {radius}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 5.0).unwrap();
        assert_eq!(c.radius(), 5.0);
        assert_eq!(c.center, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_circle_rejects_non_positive_radius() {
        assert!(matches!(
            Circle::new(Vec2::ZERO, 0.0),
            Err(CollisionError::InvalidShapeParameters(_))
        ));
        assert!(Circle::new(Vec2::ZERO, -1.0).is_err());

        let mut c = Circle::new(Vec2::ZERO, 1.0).unwrap();
        assert!(c.set_radius(-3.0).is_err());
        assert_eq!(c.radius(), 1.0);
        c.set_radius(3.0).unwrap();
        assert_eq!(c.radius(), 3.0);
    }

    #[test]
    fn test_circle_from_transform() {
        let tr = Transform::from_center_size(Vec2::new(3.0, 4.0), Vec2::new(10.0, 10.0));
        let c = Circle::from_transform(&tr).unwrap();
        assert_eq!(c.radius(), 5.0);
        assert_eq!(c.center, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_circle_from_non_square_transform_fails() {
        let tr = Transform::from_center_size(Vec2::ZERO, Vec2::new(10.0, 20.0));
        assert!(matches!(
            Circle::from_transform(&tr),
            Err(CollisionError::InvalidShapeParameters(_))
        ));
    }

    #[test]
    fn test_circle_from_zero_transform_fails() {
        let tr = Transform::from_center_size(Vec2::ZERO, Vec2::ZERO);
        assert!(matches!(
            Circle::from_transform(&tr),
            Err(CollisionError::InvalidShapeParameters(_))
        ));
    }

    #[test]
    fn test_circle_support_point() {
        let c = Circle::new(Vec2::new(10.0, 0.0), 2.0).unwrap();
        assert_relative_eq!(c.support_point(Vec2::new(5.0, 0.0)), Vec2::new(12.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(c.support_point(Vec2::new(0.0, -0.1)), Vec2::new(10.0, -2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_circle_boxes() {
        let c = Circle::new(Vec2::ZERO, 2.0).unwrap();
        let covering = c.covering_box();
        assert_eq!(covering.min, Vec2::new(-2.0, -2.0));
        assert_eq!(covering.max, Vec2::new(2.0, 2.0));

        let inner = c.inner_box();
        assert_relative_eq!(inner.size(), Vec2::new(2.0 * SQRT_2, 2.0 * SQRT_2), epsilon = EPSILON);
        // the inner square's corners lie on the circle
        assert_relative_eq!(inner.max.magnitude(), 2.0, epsilon = EPSILON);
    }
}
