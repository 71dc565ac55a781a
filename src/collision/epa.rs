//! Expanding Polytope Algorithm: recovers the penetration normal from a GJK simplex.

use super::gjk::{minkowski_support, Simplex};
use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// Edges shorter than this carry no usable normal.
const EDGE_EPSILON: f64 = 1e-12;

/// An edge of the polytope, from `index - 1` to `index` (cyclic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Outward unit normal.
    pub normal: Vec2,
    /// Distance from the origin along `normal`.
    pub distance: f64,
    /// Insertion index for a point that splits this edge.
    pub index: usize,
}

/// Convex point set around the origin, always in counter-clockwise order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polytope {
    points: Vec<Vec2>,
}

impl Polytope {
    /// Seeds the polytope from a GJK simplex, reordering it counter-clockwise.
    pub fn from_simplex(simplex: &Simplex) -> Self {
        let mut points = simplex.points().to_vec();
        if signed_area(&points) < 0.0 {
            points.reverse();
        }
        Self { points }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Edge nearest the origin. Later edges win exact ties.
    pub fn closest_edge(&self) -> Option<Edge> {
        let n = self.points.len();
        let mut closest: Option<Edge> = None;
        for i in 0..n {
            let j = (i + 1) % n;
            let a = self.points[i];
            let edge = self.points[j] - a;
            if edge.magnitude_squared() < EDGE_EPSILON {
                continue;
            }
            // right-hand perpendicular is outward for CCW winding
            let normal = Vec2::new(edge.y, -edge.x).normalize();
            let distance = normal.dot(a);
            if closest.map_or(true, |c| distance <= c.distance) {
                closest = Some(Edge {
                    normal,
                    distance,
                    index: j,
                });
            }
        }
        closest
    }

    fn insert(&mut self, index: usize, point: Vec2) {
        self.points.insert(index, point);
    }
}

/// Penetration normal and depth found by EPA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpaOutcome {
    /// Unit normal pointing from the first shape toward the second.
    pub normal: Vec2,
    pub depth: f64,
    pub iterations: usize,
    /// False when the budget ran out and `normal` is the best edge seen.
    pub converged: bool,
}

/// Expands `simplex` against `a - b` until the closest edge stops moving.
///
/// Returns `None` only when the simplex has no usable edge at all.
pub fn epa(
    a: &Shape,
    b: &Shape,
    simplex: &Simplex,
    tolerance: f64,
    max_iterations: usize,
) -> Option<EpaOutcome> {
    let mut polytope = Polytope::from_simplex(simplex);
    let mut best = polytope.closest_edge()?;

    for iteration in 0..max_iterations {
        let support = minkowski_support(a, b, best.normal);
        let support_distance = support.dot(best.normal);

        if support_distance - best.distance < tolerance {
            return Some(EpaOutcome {
                normal: best.normal,
                depth: best.distance,
                iterations: iteration + 1,
                converged: true,
            });
        }

        polytope.insert(best.index, support);
        best = polytope.closest_edge()?;
    }

    log::warn!(
        "EPA did not converge within {} iterations, using best edge (distance {:.4})",
        max_iterations,
        best.distance
    );
    Some(EpaOutcome {
        normal: best.normal,
        depth: best.distance,
        iterations: max_iterations,
        converged: false,
    })
}

fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].cross(points[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::gjk::{gjk, GjkOutcome};
    use crate::shapes::{Circle, Rectangle};
    use approx::assert_abs_diff_eq;

    const TOLERANCE: f64 = 1e-4;
    const MAX_ITERATIONS: usize = 128;

    fn circle(x: f64, y: f64, r: f64) -> Shape {
        Circle::new(Vec2::new(x, y), r).unwrap().into()
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
        Rectangle::new(Vec2::new(x, y), Vec2::new(w, h)).unwrap().into()
    }

    fn run(a: &Shape, b: &Shape) -> EpaOutcome {
        let simplex = match gjk(a, b, 1000) {
            GjkOutcome::Intersecting(simplex) => simplex,
            other => panic!("expected overlap, got {other:?}"),
        };
        epa(a, b, &simplex, TOLERANCE, MAX_ITERATIONS).expect("usable simplex")
    }

    #[test]
    fn test_polytope_winding_is_ccw() {
        let a = circle(0.0, 0.0, 25.0);
        let b = circle(40.0, 0.0, 25.0);
        let simplex = *gjk(&a, &b, 1000).simplex().unwrap();
        let polytope = Polytope::from_simplex(&simplex);
        assert!(signed_area(polytope.points()) > 0.0);
    }

    #[test]
    fn test_closest_edge_of_square() {
        let polytope = Polytope {
            points: vec![
                Vec2::new(-1.0, -2.0),
                Vec2::new(3.0, -2.0),
                Vec2::new(3.0, 2.0),
                Vec2::new(-1.0, 2.0),
            ],
        };
        let edge = polytope.closest_edge().unwrap();
        assert_abs_diff_eq!(edge.normal, Vec2::new(-1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(edge.distance, 1.0, epsilon = 1e-12);
        assert_eq!(edge.index, 0);
    }

    #[test]
    fn test_closest_edge_skips_degenerate_edges() {
        let polytope = Polytope {
            points: vec![Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)],
        };
        assert!(polytope.closest_edge().is_none());
    }

    #[test]
    fn test_epa_circles_normal_and_depth() {
        let outcome = run(&circle(0.0, 0.0, 25.0), &circle(40.0, 0.0, 25.0));
        assert!(outcome.converged);
        assert_abs_diff_eq!(outcome.normal, Vec2::new(1.0, 0.0), epsilon = 1e-2);
        assert_abs_diff_eq!(outcome.depth, 10.0, epsilon = 1e-2);
    }

    #[test]
    fn test_epa_rectangles_exact() {
        // second box overlaps the first by 2 units from above
        let outcome = run(&rect(0.0, 0.0, 10.0, 10.0), &rect(1.0, 8.0, 6.0, 10.0));
        assert!(outcome.converged);
        assert_abs_diff_eq!(outcome.normal, Vec2::new(0.0, 1.0), epsilon = 1e-9);
        assert_abs_diff_eq!(outcome.depth, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_epa_zero_budget_returns_best_edge() {
        let a = circle(0.0, 0.0, 25.0);
        let b = circle(40.0, 0.0, 25.0);
        let simplex = *gjk(&a, &b, 1000).simplex().unwrap();
        let outcome = epa(&a, &b, &simplex, TOLERANCE, 0).unwrap();
        assert!(!outcome.converged);
        assert_abs_diff_eq!(outcome.normal.magnitude(), 1.0, epsilon = 1e-12);
    }
}
