//! Gilbert-Johnson-Keerthi overlap test over the Minkowski difference of two shapes.

use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// Doubled triangle area below which three simplex points count as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Up to three Minkowski-difference points, oldest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplex {
    points: [Vec2; 3],
    len: usize,
}

impl Simplex {
    pub fn new() -> Self {
        Self {
            points: [Vec2::ZERO; 3],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.len]
    }

    /// Most recently added point.
    pub fn last(&self) -> Option<Vec2> {
        self.points().last().copied()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.points().contains(&point)
    }

    fn push(&mut self, point: Vec2) {
        debug_assert!(self.len < 3, "2D simplex holds at most three points");
        self.points[self.len] = point;
        self.len += 1;
    }

    fn remove(&mut self, index: usize) {
        self.points.copy_within(index + 1..self.len, index);
        self.len -= 1;
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a GJK run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GjkOutcome {
    /// The origin is enclosed; the triangle can seed EPA.
    Intersecting(Simplex),
    /// A separating direction was found, or the shapes merely touch.
    Separated,
    /// The iteration budget ran out. Treated as no overlap.
    Exhausted,
}

impl GjkOutcome {
    pub fn is_intersecting(&self) -> bool {
        matches!(self, GjkOutcome::Intersecting(_))
    }

    pub fn simplex(&self) -> Option<&Simplex> {
        match self {
            GjkOutcome::Intersecting(simplex) => Some(simplex),
            _ => None,
        }
    }
}

/// Support point of the Minkowski difference `a - b` along `direction`.
pub fn minkowski_support(a: &Shape, b: &Shape, direction: Vec2) -> Vec2 {
    a.support_point(direction) - b.support_point(-direction)
}

/// Runs GJK on `a - b`, rejecting early when the covering boxes are disjoint.
pub fn gjk(a: &Shape, b: &Shape, max_iterations: usize) -> GjkOutcome {
    if !a.covering_box().intersects(&b.covering_box()) {
        return GjkOutcome::Separated;
    }

    let mut direction = Vec2::X;
    let first = minkowski_support(a, b, direction);
    let mut simplex = Simplex::new();
    simplex.push(first);
    direction = -first;

    for _ in 0..max_iterations {
        // A zero direction lands here too: the difference never reaches past
        // the origin, so the shapes are disjoint or only touching.
        let support = minkowski_support(a, b, direction);
        if support.dot(direction) <= 0.0 {
            return GjkOutcome::Separated;
        }
        if simplex.contains(support) {
            // no progress possible along this direction
            return GjkOutcome::Separated;
        }

        simplex.push(support);
        if evolve_simplex(&mut simplex, &mut direction) {
            if let Some(normal) = boundary_edge_normal(&simplex) {
                // origin on an edge: overlap only if the difference extends past it
                if minkowski_support(a, b, normal).dot(normal) <= 0.0 {
                    return GjkOutcome::Separated;
                }
            }
            return GjkOutcome::Intersecting(simplex);
        }
    }

    log::warn!(
        "GJK did not converge within {} iterations, treating pair as separated",
        max_iterations
    );
    GjkOutcome::Exhausted
}

/// Updates the simplex and search direction. Returns true once the origin is enclosed.
fn evolve_simplex(simplex: &mut Simplex, direction: &mut Vec2) -> bool {
    match simplex.len() {
        2 => {
            let a = simplex.points[1];
            let b = simplex.points[0];
            *direction = segment_normal_toward_origin(a, b);
            false
        }
        3 => {
            let a = simplex.points[2];
            let b = simplex.points[1];
            let c = simplex.points[0];
            let ab = b - a;
            let ac = c - a;
            let ao = -a;

            if ab.cross(ac).abs() < COLLINEAR_EPSILON {
                // collinear triangle: fall back to the newest segment
                simplex.remove(0);
                *direction = segment_normal_toward_origin(a, b);
                return false;
            }

            let ab_normal = outward_normal(ab, ac);
            if ab_normal.dot(ao) > 0.0 {
                simplex.remove(0); // drop c
                *direction = ab_normal;
                return false;
            }

            let ac_normal = outward_normal(ac, ab);
            if ac_normal.dot(ao) > 0.0 {
                simplex.remove(1); // drop b
                *direction = ac_normal;
                return false;
            }

            true
        }
        _ => false,
    }
}

/// Outward normal of the triangle edge the origin lies on, if any.
fn boundary_edge_normal(simplex: &Simplex) -> Option<Vec2> {
    let p = simplex.points();
    (0..3).find_map(|i| {
        let start = p[i];
        let end = p[(i + 1) % 3];
        let opposite = p[(i + 2) % 3];
        let normal = outward_normal(end - start, opposite - start);
        (normal.dot(-start) >= 0.0).then_some(normal)
    })
}

/// Perpendicular to segment `ab` (newest point `a`) pointing toward the origin.
fn segment_normal_toward_origin(a: Vec2, b: Vec2) -> Vec2 {
    let perp = (b - a).perpendicular();
    if perp.dot(-a) < 0.0 {
        -perp
    } else {
        perp
    }
}

/// Perpendicular to `edge` pointing away from the triangle's remaining edge `other`.
fn outward_normal(edge: Vec2, other: Vec2) -> Vec2 {
    let perp = edge.perpendicular();
    if perp.dot(other) > 0.0 {
        -perp
    } else {
        perp
    }
}
