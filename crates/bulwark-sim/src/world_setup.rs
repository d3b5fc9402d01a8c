//! Entity spawn factories for populating the simulation world.
//!
//! Creates the player ship, turret emplacements, cover, and bullets with
//! appropriate component bundles.

use bulwark_core::components::*;
use bulwark_core::constants::*;
use bulwark_core::enums::BodyTag;
use glam::{DVec3, DVec4};
use hecs::{Entity, World};

use crate::hierarchy::Parent;

/// Spawn the player ship, unparented, at `position`.
pub fn spawn_player_ship(world: &mut World, position: DVec3) -> Entity {
    world.spawn((
        PlayerShip,
        Transform::from_translation(position),
        Velocity::default(),
        Collider {
            tag: BodyTag::Player,
            radius: PLAYER_COLLIDER_RADIUS,
        },
    ))
}

/// Spawn a turret emplacement.
///
/// `local` is relative to `parent` when one is given; construction defaults
/// are origin, identity rotation, and unit scale (`Transform::IDENTITY`).
pub fn spawn_turret(
    world: &mut World,
    emplacement_number: u32,
    parent: Option<Entity>,
    local: Transform,
    config: TurretConfig,
) -> Entity {
    let entity = world.spawn((
        Turret { emplacement_number },
        local,
        TurretState::new(config.initial_health),
        config,
        Collider {
            tag: BodyTag::Turret,
            radius: TURRET_COLLIDER_RADIUS,
        },
    ));
    if let Some(parent) = parent {
        let _ = world.insert_one(entity, Parent(parent));
    }
    entity
}

/// Spawn an asteroid — inert cover that blocks line of sight and bullets.
pub fn spawn_obstacle(world: &mut World, position: DVec3, radius: f64) -> Entity {
    world.spawn((
        Obstacle,
        Transform::from_translation(position),
        Collider {
            tag: BodyTag::Obstacle,
            radius,
        },
    ))
}

/// Spawn one round from a world-space muzzle transform, flying along the
/// muzzle's forward axis. Shared by emplacement fire control and the ship's
/// cannon.
pub fn spawn_bullet(world: &mut World, muzzle: Transform, speed: f64, color: DVec4) -> Entity {
    let velocity = muzzle.forward() * speed;
    world.spawn((
        Bullet { color },
        muzzle,
        Velocity(velocity),
        Collider {
            tag: BodyTag::Bullet,
            radius: BULLET_COLLIDER_RADIUS,
        },
    ))
}
