use super::epa::epa;
use super::gjk::{gjk, GjkOutcome};
use crate::config::CollisionConfig;
use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// Penetration of one shape into another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit normal from the first shape toward the second.
    pub normal: Vec2,
    /// Overlap along `normal`. Approximate when EPA did not converge.
    pub depth: f64,
}

/// Checks whether two shapes overlap.
///
/// Disjoint covering boxes reject, intersecting inner boxes accept, and only
/// the remaining pairs run GJK. Touching shapes do not overlap. A polygon's
/// inner box is approximate, so a thin polygon can be accepted here while
/// [`collision_normal`] still reports `NoActiveCollision`.
pub fn check_collision(a: &Shape, b: &Shape, config: &CollisionConfig) -> bool {
    if !a.covering_box().intersects(&b.covering_box()) {
        return false;
    }
    if a.inner_box().intersects(&b.inner_box()) {
        return true;
    }
    gjk(a, b, config.gjk_max_iterations).is_intersecting()
}

/// Normal along which `a` and `b` separate fastest, pointing from `a` toward `b`.
///
/// Moving `a` along `-normal` and `b` along `normal` pulls them apart.
/// Returns [`CollisionError::NoActiveCollision`] if the shapes do not overlap.
pub fn collision_normal(a: &Shape, b: &Shape, config: &CollisionConfig) -> Result<Vec2> {
    penetration(a, b, config).map(|p| p.normal)
}

/// Normal and depth of the overlap between `a` and `b`.
pub fn penetration(a: &Shape, b: &Shape, config: &CollisionConfig) -> Result<Penetration> {
    let simplex = match gjk(a, b, config.gjk_max_iterations) {
        GjkOutcome::Intersecting(simplex) => simplex,
        GjkOutcome::Separated | GjkOutcome::Exhausted => {
            return Err(CollisionError::NoActiveCollision)
        }
    };

    let outcome = epa(a, b, &simplex, config.epa_tolerance, config.epa_max_iterations)
        .ok_or(CollisionError::NoActiveCollision)?;
    log::trace!(
        "EPA normal {:?} depth {:.4} after {} iterations",
        outcome.normal,
        outcome.depth,
        outcome.iterations
    );

    Ok(Penetration {
        normal: outcome.normal,
        depth: outcome.depth,
    })
}
