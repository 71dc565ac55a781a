//! Depenetration and velocity response for overlapping bodies.
//!
//! Bodies are treated as equal mass and only linear velocity changes; the
//! simplified exchange in [`bounce_from_other`] is intentional.

use super::detection::{check_collision, collision_normal};
use crate::config::CollisionConfig;
use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;
use crate::objects::Body;

/// Pushes `a` and `b` apart until they stop overlapping.
///
/// The normal is computed once up front and not refreshed, so the result is
/// an approximation that relies on `config.depenetration_step` being small
/// relative to the shapes. Returns the number of nudges applied.
pub fn resolve_collision(a: &mut Body, b: &mut Body, config: &CollisionConfig) -> Result<usize> {
    if !check_collision(&a.collider, &b.collider, config) {
        return Ok(0);
    }

    let normal = separation_normal(a, b, config)?;
    let step = normal * config.depenetration_step;

    let mut steps = 0;
    while check_collision(&a.collider, &b.collider, config) {
        if steps >= config.max_depenetration_steps {
            log::warn!(
                "Depenetration stopped after {} steps with bodies still overlapping",
                steps
            );
            break;
        }
        a.transform.center -= step;
        b.transform.center += step;
        a.sync_collider();
        b.sync_collider();
        steps += 1;
    }

    log::trace!("Resolved overlap along {:?} in {} steps", normal, steps);
    Ok(steps)
}

/// EPA normal, or the center-to-center direction when EPA has nothing usable.
fn separation_normal(a: &Body, b: &Body, config: &CollisionConfig) -> Result<Vec2> {
    match collision_normal(&a.collider, &b.collider, config) {
        Ok(normal) if !normal.is_near_zero(1e-9) => Ok(normal),
        Ok(_) | Err(CollisionError::NoActiveCollision) => {
            let fallback = (b.collider.center() - a.collider.center()).normalize();
            let fallback = if fallback.is_near_zero(1e-9) { Vec2::X } else { fallback };
            log::debug!("No usable EPA normal, separating along {:?}", fallback);
            Ok(fallback)
        }
        Err(err) => Err(err),
    }
}

/// Mirrors `velocity` across the line whose normal is `normal`.
///
/// A zero normal leaves the velocity unchanged.
pub fn bounce_by_normal(velocity: Vec2, normal: Vec2) -> Vec2 {
    let n = normal.normalize();
    velocity - n * (2.0 * velocity.dot(n))
}

/// Exchanges the along-normal part of the relative velocity between two bodies.
///
/// `normal` is used as given (not re-normalized), matching how gameplay tuned it.
pub fn bounce_from_other(a: &mut Body, b: &mut Body, normal: Vec2) {
    let relative = a.velocity - b.velocity;
    a.velocity -= normal * normal.dot(relative);
    b.velocity -= normal * normal.dot(-relative);
}
