//! Collider flattening and contact-enter detection.
//!
//! Each tick, every collider-bearing entity is flattened into a plain
//! physics `Body` (world-space center, scaled radius). The same body list
//! feeds both the contact tracker and the turret controller's ray casts, so
//! all queries within a tick see one consistent world state.

use hecs::{Entity, World};

use bulwark_core::components::Collider;
use bulwark_physics::{Body, ContactTracker};

use crate::hierarchy;

/// Flatten collider-bearing entities into `bodies`; `entities[i]` is the ECS
/// handle behind `bodies[i]`. Reuses the caller's buffers.
pub fn collect_bodies(world: &World, bodies: &mut Vec<Body>, entities: &mut Vec<Entity>) {
    bodies.clear();
    entities.clear();

    let mut query = world.query::<&Collider>();
    for (entity, collider) in query.iter() {
        let world_tf = match hierarchy::world_transform(world, entity) {
            Some(t) => t,
            None => continue,
        };
        bodies.push(Body {
            id: entity.to_bits().get(),
            tag: collider.tag,
            center: world_tf.translation,
            radius: collider.radius * world_tf.scale.abs().max_element(),
        });
        entities.push(entity);
    }
}

/// Report contacts entering this tick as index pairs into the body list.
pub fn run(tracker: &mut ContactTracker, bodies: &[Body], out: &mut Vec<(usize, usize)>) {
    tracker.detect_entering(bodies, out);
}
