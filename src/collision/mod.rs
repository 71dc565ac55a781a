pub mod aabb;
pub mod detection;
pub mod epa;
pub mod gjk;
pub mod resolution;

// Re-export key types
pub use aabb::Aabb;
pub use detection::{check_collision, collision_normal, penetration, Penetration};
pub use epa::{EpaOutcome, Polytope};
pub use gjk::{GjkOutcome, Simplex};
