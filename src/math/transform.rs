use super::vec2::Vec2;
use crate::collision::Aabb;
use serde::{Deserialize, Serialize};

/// Position, extents and orientation of an entity.
///
/// `scaled_size` and `corner` are always derived from the stored fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub center: Vec2,
    pub size: Vec2,
    pub scale: Vec2,
    /// Degrees in [0, 360).
    pub angle: f64,
}

impl Transform {
    pub fn new(center: Vec2, size: Vec2, scale: Vec2, angle: f64) -> Self {
        Self {
            center,
            size,
            scale,
            angle: wrap_degrees(angle),
        }
    }

    /// Unscaled, unrotated transform.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size, Vec2::ONE, 0.0)
    }

    pub fn scaled_size(&self) -> Vec2 {
        self.size.component_mul(self.scale)
    }

    /// Top-left (minimum) corner of the scaled extents.
    pub fn corner(&self) -> Vec2 {
        self.center - self.scaled_size() / 2.0
    }

    /// The axis-aligned rectangle covered by the scaled extents, ignoring rotation.
    pub fn to_aabb(&self) -> Aabb {
        Aabb::from_corner_size(self.corner(), self.scaled_size())
    }

    /// Adds `delta` degrees to the angle, keeping it in [0, 360).
    pub fn rotate(&mut self, delta: f64) {
        self.angle = wrap_degrees(self.angle + delta);
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle.to_radians()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_center_size(Vec2::ZERO, Vec2::ONE)
    }
}

fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_transform_derived_fields() {
        let t = Transform::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0), Vec2::new(2.0, 0.5), 0.0);
        assert_eq!(t.scaled_size(), Vec2::new(8.0, 3.0));
        assert_eq!(t.corner(), Vec2::new(6.0, 18.5));

        let aabb = t.to_aabb();
        assert_eq!(aabb.min, Vec2::new(6.0, 18.5));
        assert_eq!(aabb.max, Vec2::new(14.0, 21.5));
    }

    #[test]
    fn test_transform_derived_fields_follow_center() {
        let mut t = Transform::from_center_size(Vec2::ZERO, Vec2::new(2.0, 2.0));
        t.center = Vec2::new(5.0, 5.0);
        assert_eq!(t.corner(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_transform_angle_wraps() {
        let t = Transform::new(Vec2::ZERO, Vec2::ONE, Vec2::ONE, 450.0);
        assert_relative_eq!(t.angle, 90.0, epsilon = EPSILON);

        let mut t = Transform::default();
        t.rotate(-30.0);
        assert_relative_eq!(t.angle, 330.0, epsilon = EPSILON);
        t.rotate(30.0);
        assert_relative_eq!(t.angle, 0.0, epsilon = EPSILON);
        assert!(t.angle < 360.0);
    }

    #[test]
    fn test_transform_angle_radians() {
        let t = Transform::new(Vec2::ZERO, Vec2::ONE, Vec2::ONE, 180.0);
        assert_relative_eq!(t.angle_radians(), std::f64::consts::PI, epsilon = EPSILON);
    }
}
