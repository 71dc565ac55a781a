//! Collision subsystem for a small real-time 2D game.
//!
//! Shapes expose a support mapping; GJK decides overlap, EPA recovers the
//! separation normal, and the resolution layer turns that into depenetration
//! and bounces. [`PhysicsWorld`] runs the per-tick pairwise pass.

pub mod collision;
pub mod config;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::Aabb;
pub use config::{CollisionConfig, ConfigError};
pub use error::{CollisionError, Result};
pub use math::{Transform, Vec2};
pub use objects::Body;
pub use shapes::{Circle, Polygon, Rectangle, Shape};
pub use world::{Arena, CollisionListener, Contact, NoopListener, PhysicsWorld};
