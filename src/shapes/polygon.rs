use crate::collision::Aabb;
use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;

/// Fraction of the covering box's extents kept for the inner box.
const INNER_BOX_RATIO: f64 = 0.25;

/// A convex polygon stored as a center plus vertex offsets relative to it.
///
/// Translation only moves the center; rotation only touches the offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    center: Vec2,
    offsets: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from world-space vertices around `center`.
    pub fn new(center: Vec2, vertices: &[Vec2]) -> Result<Self> {
        Self::from_offsets(center, vertices.iter().map(|v| *v - center).collect())
    }

    /// Creates a polygon from center-relative vertex offsets.
    pub fn from_offsets(center: Vec2, offsets: Vec<Vec2>) -> Result<Self> {
        if offsets.is_empty() {
            return Err(CollisionError::InvalidShapeParameters(
                "polygon needs at least one vertex".into(),
            ));
        }
        if let Some(bad) = offsets.iter().find(|o| !o.is_finite()) {
            return Err(CollisionError::InvalidShapeParameters(format!(
                "polygon vertex offset is not finite: {bad:?}"
            )));
        }
        Ok(Self { center, offsets })
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    /// World-space vertices.
    pub fn vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.offsets.iter().map(move |o| self.center + *o)
    }

    /// Rotates every offset counter-clockwise by `degrees` about the center.
    pub fn rotate(&mut self, degrees: f64) {
        if degrees.abs() < f64::EPSILON {
            return;
        }
        let radians = degrees.to_radians();
        for offset in self.offsets.iter_mut() {
            *offset = offset.rotate(radians);
        }
    }

    pub fn support_point(&self, direction: Vec2) -> Vec2 {
        let mut best = self.center + self.offsets[0];
        let mut best_dot = best.dot(direction);
        for vertex in self.vertices().skip(1) {
            let dot = vertex.dot(direction);
            if dot > best_dot {
                best_dot = dot;
                best = vertex;
            }
        }
        best
    }

    pub fn covering_box(&self) -> Aabb {
        let vertices: Vec<Vec2> = self.vertices().collect();
        Aabb::from_points(&vertices).unwrap_or_else(|| Aabb::new(self.center, self.center))
    }

    /// Covering box shrunk to a quarter of its extents about its own center.
    ///
    /// Heuristic only: a thin or lopsided polygon may not contain this box.
    pub fn inner_box(&self) -> Aabb {
        self.covering_box().scaled_about_center(INNER_BOX_RATIO)
    }
}
