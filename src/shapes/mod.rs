pub mod circle;
pub mod polygon;
pub mod rectangle;

// Re-export the specific shape types
pub use circle::Circle;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use crate::collision::{detection, Aabb};
use crate::config::CollisionConfig;
use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;

/// Enum representing the collider geometry of a body.
///
/// Every variant answers the support-mapping query, which is all the
/// narrow phase needs to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// The boundary point farthest along `direction`.
    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        match self {
            Shape::Rectangle(rect) => rect.support_point(direction),
            Shape::Circle(circle) => circle.support_point(direction),
            Shape::Polygon(poly) => poly.support_point(direction),
        }
    }

    /// An axis-aligned box guaranteed to contain the shape.
    pub fn covering_box(&self) -> Aabb {
        match self {
            Shape::Rectangle(rect) => rect.bounding_box(),
            Shape::Circle(circle) => circle.covering_box(),
            Shape::Polygon(poly) => poly.covering_box(),
        }
    }

    /// An axis-aligned box lying inside the shape (heuristic for polygons).
    pub fn inner_box(&self) -> Aabb {
        match self {
            Shape::Rectangle(rect) => rect.bounding_box(),
            Shape::Circle(circle) => circle.inner_box(),
            Shape::Polygon(poly) => poly.inner_box(),
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Rectangle(rect) => rect.center(),
            Shape::Circle(circle) => circle.center,
            Shape::Polygon(poly) => poly.center(),
        }
    }

    pub fn set_center(&mut self, center: Vec2) {
        match self {
            Shape::Rectangle(rect) => rect.set_center(center),
            Shape::Circle(circle) => circle.center = center,
            Shape::Polygon(poly) => poly.set_center(center),
        }
    }

    /// Rotates the shape about its center by `degrees`.
    ///
    /// Rectangles are axis-aligned and refuse; circles ignore the call.
    pub fn rotate(&mut self, degrees: f64) -> Result<()> {
        match self {
            Shape::Rectangle(_) => Err(CollisionError::UnsupportedOperation(
                "rectangles cannot rotate, use a polygon collider instead",
            )),
            Shape::Circle(_) => Ok(()),
            Shape::Polygon(poly) => {
                poly.rotate(degrees);
                Ok(())
            }
        }
    }

    pub fn supports_rotation(&self) -> bool {
        !matches!(self, Shape::Rectangle(_))
    }

    /// Whether this shape overlaps `other`. See [`detection::check_collision`].
    pub fn check_collision(&self, other: &Shape, config: &CollisionConfig) -> bool {
        detection::check_collision(self, other, config)
    }

    /// Direction from this shape toward `other` along which they separate fastest.
    /// See [`detection::collision_normal`].
    pub fn collision_normal(&self, other: &Shape, config: &CollisionConfig) -> Result<Vec2> {
        detection::collision_normal(self, other, config)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(poly: Polygon) -> Self {
        Shape::Polygon(poly)
    }
}
