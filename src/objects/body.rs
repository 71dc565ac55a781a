use crate::collision::{detection, resolution};
use crate::config::CollisionConfig;
use crate::error::{CollisionError, Result};
use crate::math::{Transform, Vec2};
use crate::shapes::Shape;

/// A colliding entity: its transform, its collider and its linear motion.
///
/// The collider is owned by value and must follow `transform.center`; call
/// [`Body::sync_collider`] after moving the transform by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub transform: Transform,
    pub collider: Shape,

    pub velocity: Vec2,
    /// Unit-ish direction `acceleration` is applied along.
    pub acceleration_direction: Vec2,
    pub acceleration: f64,
    /// Speed cap applied after acceleration. `None` means uncapped.
    pub max_speed: Option<f64>,
    /// Degrees per second. Zero for bodies whose collider cannot rotate.
    angular_velocity: f64,

    /// Inactive bodies are skipped by integration and by the collision pass.
    pub active: bool,
}

impl Body {
    /// Creates a resting body. The collider is moved onto `transform.center`.
    pub fn new(transform: Transform, mut collider: Shape) -> Self {
        collider.set_center(transform.center);
        Self {
            transform,
            collider,
            velocity: Vec2::ZERO,
            acceleration_direction: Vec2::ZERO,
            acceleration: 0.0,
            max_speed: None,
            angular_velocity: 0.0,
            active: true,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, direction: Vec2, acceleration: f64) -> Self {
        self.acceleration_direction = direction;
        self.acceleration = acceleration;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    pub fn with_angular_velocity(mut self, degrees_per_second: f64) -> Result<Self> {
        self.set_angular_velocity(degrees_per_second)?;
        Ok(self)
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Fails with `UnsupportedOperation` for a non-zero spin on a rectangle collider.
    pub fn set_angular_velocity(&mut self, degrees_per_second: f64) -> Result<()> {
        check_spin(&self.collider, degrees_per_second)?;
        self.angular_velocity = degrees_per_second;
        Ok(())
    }

    /// Checks that the collider can follow the current spin.
    ///
    /// Only fails if the collider was swapped after the spin was set.
    pub fn validate(&self) -> Result<()> {
        check_spin(&self.collider, self.angular_velocity)
    }

    /// Re-applies the transform's center to the collider.
    pub fn sync_collider(&mut self) {
        self.collider.set_center(self.transform.center);
    }

    /// Rotates both the transform and the collider by `degrees`.
    ///
    /// The transform is left untouched if the collider refuses.
    pub fn rotate(&mut self, degrees: f64) -> Result<()> {
        self.collider.rotate(degrees)?;
        self.transform.rotate(degrees);
        Ok(())
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn check_collision(&self, other: &Body, config: &CollisionConfig) -> bool {
        detection::check_collision(&self.collider, &other.collider, config)
    }

    /// Separation normal toward `other`. See [`detection::collision_normal`].
    ///
    /// Can fail with `NoActiveCollision` even right after `check_collision`
    /// returned true: the polygon inner-box accept is approximate.
    pub fn collision_normal(&self, other: &Body, config: &CollisionConfig) -> Result<Vec2> {
        detection::collision_normal(&self.collider, &other.collider, config)
    }

    pub fn resolve_collision(&mut self, other: &mut Body, config: &CollisionConfig) -> Result<usize> {
        resolution::resolve_collision(self, other, config)
    }

    pub fn bounce_by_normal(&mut self, normal: Vec2) {
        self.velocity = resolution::bounce_by_normal(self.velocity, normal);
    }

    pub fn bounce_from_other(&mut self, other: &mut Body, collision_normal: Vec2) {
        resolution::bounce_from_other(self, other, collision_normal);
    }
}

fn check_spin(collider: &Shape, degrees_per_second: f64) -> Result<()> {
    if degrees_per_second != 0.0 && !collider.supports_rotation() {
        return Err(CollisionError::UnsupportedOperation(
            "rectangle colliders cannot spin",
        ));
    }
    Ok(())
}
