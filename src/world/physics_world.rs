use crate::{
    config::CollisionConfig,
    error::Result,
    integration::integrator,
    math::vec2::Vec2,
    objects::Body,
};

/// Circular play area. Bodies leaving it are reflected back inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f64,
}

impl Arena {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center) <= self.radius
    }

    /// Reflects the body's velocity if it is outside and still moving outward.
    fn contain(&self, body: &mut Body) -> bool {
        let outward = body.transform.center - self.center;
        if self.contains(body.transform.center) || body.velocity.dot(outward) <= 0.0 {
            return false;
        }
        body.bounce_by_normal(outward);
        true
    }
}

/// An overlapping pair found during a step, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair {
    pub first: usize,
    pub second: usize,
}

/// One participant's view of a detected overlap.
///
/// `check_collision` held for the pair, but `collision_normal` may still be
/// `Err(NoActiveCollision)` when a polygon's approximate inner box accepted it.
pub struct Contact<'a> {
    pub subject_index: usize,
    pub other_index: usize,
    pub subject: &'a mut Body,
    pub other: &'a mut Body,
    pub config: &'a CollisionConfig,
}

/// Receives a callback per participant of each overlapping pair.
pub trait CollisionListener {
    fn on_collided(&mut self, contact: Contact<'_>);
}

impl<F> CollisionListener for F
where
    F: FnMut(Contact<'_>),
{
    fn on_collided(&mut self, contact: Contact<'_>) {
        self(contact)
    }
}

/// Listener that ignores every contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl CollisionListener for NoopListener {
    fn on_collided(&mut self, _contact: Contact<'_>) {}
}

/// Owns the colliding bodies for a simulation and drives each physics tick.
///
/// Bodies are kept in insertion order, which fixes both the pair traversal
/// order and which body of a pair is notified first.
pub struct PhysicsWorld {
    pub bodies: Vec<Body>,
    pub config: CollisionConfig,
    pub arena: Option<Arena>,
    /// Pairs that overlapped during the last step.
    pub contacts: Vec<ContactPair>,
}

impl PhysicsWorld {
    /// Creates a new, empty world with the default collision configuration.
    pub fn new() -> Self {
        Self::with_config(CollisionConfig::default())
    }

    pub fn with_config(config: CollisionConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
            arena: None,
            contacts: Vec::new(),
        }
    }

    pub fn with_arena(mut self, arena: Arena) -> Self {
        self.arena = Some(arena);
        self
    }

    /// Adds a body to the world and returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Drops inactive bodies, keeping the rest in order. Call between steps only:
    /// indices of bodies after a removed one shift down.
    pub fn remove_inactive(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|body| body.active);
        before - self.bodies.len()
    }

    /// Advances the simulation by one time step `dt` and returns the number of contacts.
    ///
    /// Bodies move first (colliders follow), then every pair of active bodies
    /// is tested once in insertion order. For each overlap the listener hears
    /// from the earlier body, then from the later one. If an active body fails
    /// [`Body::validate`] the error is returned and no body moves.
    pub fn step(&mut self, dt: f64, listener: &mut impl CollisionListener) -> Result<usize> {
        self.contacts.clear();
        if dt <= 0.0 {
            return Ok(0);
        }

        // 1. Integrate motion, refusing the whole step before anything moves
        for body in self.bodies.iter().filter(|b| b.active) {
            body.validate()?;
        }
        for body in self.bodies.iter_mut() {
            integrator::integrate(body, dt)?;
        }

        // 2. Keep bodies inside the arena
        if let Some(arena) = self.arena {
            for body in self.bodies.iter_mut().filter(|b| b.active) {
                if arena.contain(body) {
                    log::trace!("Arena bounce at {:?}", body.transform.center);
                }
            }
        }

        // 3. Pairwise collision pass
        self.check_collisions(listener);

        if !self.contacts.is_empty() {
            log::debug!("Step produced {} contacts", self.contacts.len());
        }
        Ok(self.contacts.len())
    }

    /// Tests all pairs of active bodies and notifies the listener of overlaps.
    fn check_collisions(&mut self, listener: &mut impl CollisionListener) {
        let config = self.config;
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (body_a, body_b) = body_pair_mut(&mut self.bodies, i, j);
                if !body_a.active || !body_b.active {
                    continue;
                }
                if !body_a.check_collision(body_b, &config) {
                    continue;
                }

                log::trace!("Bodies {} and {} collided", i, j);
                self.contacts.push(ContactPair { first: i, second: j });

                listener.on_collided(Contact {
                    subject_index: i,
                    other_index: j,
                    subject: body_a,
                    other: body_b,
                    config: &config,
                });
                let (body_a, body_b) = body_pair_mut(&mut self.bodies, i, j);
                listener.on_collided(Contact {
                    subject_index: j,
                    other_index: i,
                    subject: body_b,
                    other: body_a,
                    config: &config,
                });
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable references to two distinct bodies, `idx_a < idx_b`.
fn body_pair_mut(bodies: &mut [Body], idx_a: usize, idx_b: usize) -> (&mut Body, &mut Body) {
    debug_assert!(idx_a < idx_b);
    let (head, tail) = bodies.split_at_mut(idx_b);
    (&mut head[idx_a], &mut tail[0])
}
