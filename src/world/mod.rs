pub mod physics_world;

pub use physics_world::{Arena, CollisionListener, Contact, ContactPair, NoopListener, PhysicsWorld};
