//! Kinematic integration system.
//!
//! Updates translation from velocity each tick: `translation += velocity * dt`.

use hecs::World;

use bulwark_core::components::{Transform, Velocity};
use bulwark_core::constants::DT;

/// Run kinematic integration for all entities with Transform + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (transform, velocity)) in world.query_mut::<(&mut Transform, &Velocity)>() {
        transform.translation += velocity.0 * DT;
    }
}
