//! Cleanup system: removes destroyed emplacements, expended rounds, and
//! bullets that left the playable volume.
//!
//! Despawning is the deterministic deregistration point — once an entity is
//! gone, neither the per-tick controller nor contact delivery can reach it.

use hecs::{Entity, World};

use bulwark_core::components::{Bullet, Transform, TurretState};
use bulwark_core::constants::WORLD_RADIUS;
use bulwark_core::enums::TurretStatus;

/// Remove entities in terminal states. Uses the engine's pre-allocated
/// buffer; the damage system may already have queued expended rounds here.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, state) in world.query_mut::<&TurretState>() {
        if state.status == TurretStatus::Destroyed {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_bullet, transform)) in world.query_mut::<(&Bullet, &Transform)>() {
        if transform.translation.length() > WORLD_RADIUS {
            despawn_buffer.push(entity);
        }
    }

    // Duplicates are harmless: a second despawn of the same entity is an
    // ignored error.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
