use crate::error::Result;
use crate::objects::Body;

/// Advances the body's linear motion and spin by `dt` seconds, then re-syncs its collider.
///
/// Semi-implicit Euler: velocity is updated first and the new velocity moves
/// the body. Inactive bodies and non-positive `dt` are left untouched.
pub fn integrate(body: &mut Body, dt: f64) -> Result<()> {
    if !body.active || dt <= 0.0 {
        return Ok(());
    }

    // --- Linear Motion --- //
    body.velocity += body.acceleration_direction * (body.acceleration * dt);
    if let Some(max_speed) = body.max_speed {
        if body.velocity.magnitude() > max_speed {
            body.velocity = body.velocity.normalize() * max_speed;
        }
    }
    body.transform.center += body.velocity * dt;

    // --- Angular Motion --- //
    let spin = body.angular_velocity() * dt;
    if spin != 0.0 {
        body.rotate(spin)?;
    }

    body.sync_collider();
    Ok(())
}
