mod body;
mod collider;
mod error;
mod player;
mod scene;
mod world;

pub use body::BodyMut;
pub use collider::{
    create_box_collider, create_convex_hull_collider, create_ground_plane_collider,
    create_sphere_collider,
};
pub use error::PhysicsError;
pub use player::{DirectionMarker, PlayerBody, PLAYER_SPAWN};
pub use scene::{SceneBodies, SceneKind};
pub use world::{FixedStep, PhysicsWorld, DEFAULT_GRAVITY};

/// Contact record as reported by [`PhysicsWorld`]
pub type BodyContact = playground_core::Contact<rapier3d::dynamics::RigidBodyHandle>;

// Re-export for convenience
pub use glam;
pub use rapier3d;
