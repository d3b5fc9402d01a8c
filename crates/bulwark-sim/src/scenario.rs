//! Scenario definitions — fixed and seeded emplacement layouts.
//!
//! Every scenario places the player ship at the origin; emplacements face
//! the approach lanes they are meant to cover.

use std::f64::consts::{PI, TAU};

use bulwark_core::components::{Transform, TurretConfig};
use bulwark_core::enums::ScenarioId;
use glam::{DQuat, DVec3};
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_turret_ai::tracking;

use crate::world_setup;

/// Populate the world for a scenario. Returns the number of emplacements.
pub fn populate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scenario: ScenarioId,
    next_emplacement_number: &mut u32,
) -> u32 {
    match scenario {
        ScenarioId::ProvingGround => proving_ground(world, next_emplacement_number),
        ScenarioId::AsteroidScreen => asteroid_screen(world, next_emplacement_number),
        ScenarioId::Gauntlet => gauntlet(world, rng, next_emplacement_number),
    }
}

fn take_number(next: &mut u32) -> u32 {
    let n = *next;
    *next += 1;
    n
}

/// One exposed emplacement 80m up the -Z axis, guns trained on the origin.
fn proving_ground(world: &mut World, next: &mut u32) -> u32 {
    world_setup::spawn_player_ship(world, DVec3::ZERO);
    world_setup::spawn_turret(
        world,
        take_number(next),
        None,
        Transform {
            translation: DVec3::new(0.0, 0.0, -80.0),
            rotation: DQuat::from_rotation_y(PI),
            scale: DVec3::ONE,
        },
        TurretConfig::default(),
    );
    1
}

/// One emplacement dug in behind an asteroid on the approach axis. The rock
/// blocks line of sight until the ship moves off-axis.
fn asteroid_screen(world: &mut World, next: &mut u32) -> u32 {
    world_setup::spawn_player_ship(world, DVec3::ZERO);
    world_setup::spawn_obstacle(world, DVec3::new(0.0, 0.0, -40.0), 6.0);
    world_setup::spawn_turret(
        world,
        take_number(next),
        None,
        Transform {
            translation: DVec3::new(0.0, 0.0, -80.0),
            rotation: DQuat::from_rotation_y(PI),
            scale: DVec3::ONE,
        },
        TurretConfig::default(),
    );
    1
}

/// A ring of emplacements at seeded-random bearings with scattered asteroid
/// cover. Two additional emplacements are mounted on rocks of their own.
fn gauntlet(world: &mut World, rng: &mut ChaCha8Rng, next: &mut u32) -> u32 {
    world_setup::spawn_player_ship(world, DVec3::ZERO);

    // Scattered cover between the ship and the ring.
    for _ in 0..8 {
        let bearing = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(25.0..70.0);
        let position = DVec3::new(
            bearing.cos() * distance,
            rng.gen_range(-10.0..10.0),
            bearing.sin() * distance,
        );
        world_setup::spawn_obstacle(world, position, rng.gen_range(3.0..8.0));
    }

    // The ring proper.
    let ring_count = 6u32;
    for _ in 0..ring_count {
        let bearing = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(60.0..90.0);
        let position = DVec3::new(bearing.cos() * distance, 0.0, bearing.sin() * distance);
        world_setup::spawn_turret(
            world,
            take_number(next),
            None,
            Transform {
                translation: position,
                rotation: tracking::look_rotation(-position, DVec3::Y),
                scale: DVec3::ONE,
            },
            TurretConfig::default(),
        );
    }

    // Emplacements mounted on their own rocks, framed by the rock's transform.
    let mounted_count = 2u32;
    for _ in 0..mounted_count {
        let bearing = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(40.0..60.0);
        let radius = rng.gen_range(4.0..6.0);
        let position = DVec3::new(bearing.cos() * distance, 0.0, bearing.sin() * distance);
        let anchor = world_setup::spawn_obstacle(world, position, radius);
        world_setup::spawn_turret(
            world,
            take_number(next),
            Some(anchor),
            Transform {
                // High enough that the mount clears its own collider.
                translation: DVec3::new(0.0, radius + 3.0, 0.0),
                rotation: tracking::look_rotation(-position, DVec3::Y),
                scale: DVec3::ONE,
            },
            TurretConfig::default(),
        );
    }

    ring_count + mounted_count
}
