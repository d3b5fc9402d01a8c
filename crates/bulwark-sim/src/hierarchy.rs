//! Parent links and world-space transform resolution.
//!
//! Transforms are stored parent-relative; anything that needs world space
//! (physics flattening, the turret controller, snapshots) composes up the
//! chain here.

use bulwark_core::components::Transform;
use glam::DQuat;
use hecs::{Entity, World};

/// Link to the entity whose transform frames this entity's local transform.
#[derive(Debug, Clone, Copy)]
pub struct Parent(pub Entity);

/// Resolve an entity's world-space transform by composing up the parent
/// chain. `None` when the entity (or an ancestor) carries no `Transform`.
pub fn world_transform(world: &World, entity: Entity) -> Option<Transform> {
    let mut result = *world.get::<&Transform>(entity).ok()?;
    let mut cursor = entity;
    while let Ok(parent) = world.get::<&Parent>(cursor) {
        let parent_entity = parent.0;
        let parent_tf = *world.get::<&Transform>(parent_entity).ok()?;
        result = parent_tf.mul_transform(&result);
        cursor = parent_entity;
    }
    Some(result)
}

/// World-space rotation of an entity's parent frame. Identity when the
/// entity is unparented, so `parent_rotation.inverse() * world_rotation`
/// always yields a valid local rotation.
pub fn parent_world_rotation(world: &World, entity: Entity) -> DQuat {
    let parent_entity = match world.get::<&Parent>(entity) {
        Ok(parent) => parent.0,
        Err(_) => return DQuat::IDENTITY,
    };
    world_transform(world, parent_entity)
        .map(|t| t.rotation)
        .unwrap_or(DQuat::IDENTITY)
}
