//! Collider construction helpers
//!
//! Thin wrappers over Rapier's `ColliderBuilder` taking glam types, so scene
//! code never has to spell out nalgebra vectors.

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::prelude::*;

use crate::error::PhysicsError;

/// Create a box collider
///
/// # Arguments
/// * `half_extents` - Half-size along each axis
pub fn create_box_collider(half_extents: Vec3) -> Collider {
    ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build()
}

/// Create a sphere collider
pub fn create_sphere_collider(radius: f32) -> Collider {
    ColliderBuilder::ball(radius).build()
}

/// Create an infinite ground plane through the body origin
///
/// Everything on the opposite side of `normal` is solid.
pub fn create_ground_plane_collider(normal: Vec3) -> Collider {
    let normal = Unit::new_normalize(vector![normal.x, normal.y, normal.z]);
    ColliderBuilder::halfspace(normal).build()
}

/// Create a convex hull collider around a point cloud
///
/// # Arguments
/// * `name` - Used in the error if the hull is degenerate
/// * `points` - Hull vertices in body-local space
pub fn create_convex_hull_collider(name: &str, points: &[Vec3]) -> Result<Collider, PhysicsError> {
    let degenerate = || PhysicsError::DegenerateHull {
        name: name.to_string(),
        points: points.len(),
    };

    // A solid needs at least four points
    if points.len() < 4 {
        return Err(degenerate());
    }

    let points: Vec<Point<Real>> = points.iter().map(|p| point![p.x, p.y, p.z]).collect();

    ColliderBuilder::convex_hull(&points)
        .map(|builder| builder.build())
        .ok_or_else(degenerate)
}
