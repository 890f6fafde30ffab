//! Playground scenes
//!
//! A scene only populates the physics world with static bodies. Nothing here
//! produces render geometry.

use std::fmt;
use std::str::FromStr;

use glam::{Quat, Vec3};
use rapier3d::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collider::{
    create_box_collider, create_convex_hull_collider, create_ground_plane_collider,
};
use crate::error::PhysicsError;
use crate::world::PhysicsWorld;

/// Static box obstacle: centre and full dimensions
struct BoxObstacle {
    position: Vec3,
    dimensions: Vec3,
}

const BASIC_BOXES: [BoxObstacle; 3] = [
    BoxObstacle {
        position: Vec3::new(12.0, 2.0, -1.0),
        dimensions: Vec3::new(8.0, 4.0, 4.0),
    },
    BoxObstacle {
        position: Vec3::new(8.0, 1.0, 6.0),
        dimensions: Vec3::new(8.0, 2.0, 4.0),
    },
    BoxObstacle {
        position: Vec3::new(4.0, 0.5, 12.0),
        dimensions: Vec3::new(4.0, 1.0, 4.0),
    },
];

/// Circumradius of the central tetrahedron
const TETRAHEDRON_RADIUS: f32 = 8.0;

/// Scenes that can be loaded into a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Ground plane, three stepped boxes and a tetrahedron standing on a vertex
    #[default]
    Basic,
}

impl SceneKind {
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Basic => "basic",
        }
    }

    /// Add the scene's static bodies to `world`
    pub fn build(self, world: &mut PhysicsWorld) -> Result<SceneBodies, PhysicsError> {
        let bodies = match self {
            SceneKind::Basic => build_basic(world)?,
        };
        tracing::info!(
            "Built scene '{}' with {} static bodies",
            self.name(),
            bodies.len()
        );
        Ok(bodies)
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(SceneKind::Basic),
            other => Err(PhysicsError::UnknownScene(other.to_string())),
        }
    }
}

/// Handles of the static bodies a scene created
#[derive(Debug, Clone, Default)]
pub struct SceneBodies {
    pub ground: Option<RigidBodyHandle>,
    pub obstacles: Vec<RigidBodyHandle>,
}

impl SceneBodies {
    /// Total number of bodies
    pub fn len(&self) -> usize {
        self.obstacles.len() + usize::from(self.ground.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn add_static(world: &mut PhysicsWorld, position: Vec3, collider: Collider) -> RigidBodyHandle {
    let body = RigidBodyBuilder::fixed()
        .translation(vector![position.x, position.y, position.z])
        .build();
    let handle = world.add_rigid_body(body);
    world.add_collider(collider, handle);
    handle
}

/// Vertices of a regular tetrahedron with one vertex pointing straight up
fn tetrahedron_vertices(radius: f32) -> [Vec3; 4] {
    let tilt = Quat::from_axis_angle(
        Vec3::new(1.0, 0.0, -1.0).normalize(),
        2.0_f32.sqrt().atan(),
    );

    [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ]
    .map(|v| tilt * (v.normalize() * radius))
}

fn build_basic(world: &mut PhysicsWorld) -> Result<SceneBodies, PhysicsError> {
    let mut bodies = SceneBodies::default();

    for obstacle in &BASIC_BOXES {
        let collider = create_box_collider(obstacle.dimensions * 0.5);
        bodies
            .obstacles
            .push(add_static(world, obstacle.position, collider));
    }

    bodies.ground = Some(add_static(
        world,
        Vec3::ZERO,
        create_ground_plane_collider(Vec3::Y),
    ));

    let hull = create_convex_hull_collider(
        "tetrahedron",
        &tetrahedron_vertices(TETRAHEDRON_RADIUS),
    )?;
    bodies.obstacles.push(add_static(world, Vec3::ZERO, hull));

    Ok(bodies)
}
