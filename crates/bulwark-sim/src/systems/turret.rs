//! Turret controller system — acquisition, tracking, fire control, cooldown.
//!
//! Per emplacement and per tick: cast a ray at the player ship, and with
//! line of sight slew toward it and release a round when the fire gate is
//! open. The fire gate decays every tick regardless of acquisition.

use glam::{DQuat, DVec3, DVec4};
use hecs::{Entity, World};

use bulwark_core::components::{PlayerShip, Transform, Turret, TurretConfig, TurretState};
use bulwark_core::constants::DT;
use bulwark_core::enums::{BodyTag, TurretStatus};
use bulwark_core::events::AudioEvent;
use bulwark_physics::{cast_ray, Body};
use bulwark_turret_ai::{gunnery, tracking};

use crate::engine::ScoreState;
use crate::hierarchy;
use crate::world_setup;

/// Per-emplacement results of one controller tick, applied after iteration.
struct TurretUpdate {
    entity: Entity,
    firing_rate: f64,
    /// New parent-relative rotation, present only on acquisition ticks.
    new_local_rotation: Option<DQuat>,
    fired: bool,
}

/// A round to materialize once iteration is over.
struct PendingShot {
    emplacement_number: u32,
    muzzle: Transform,
    speed: f64,
    color: DVec4,
    volume: f64,
}

/// Run the turret controller for every active emplacement.
pub fn run(
    world: &mut World,
    bodies: &[Body],
    audio_events: &mut Vec<AudioEvent>,
    score: &mut ScoreState,
) {
    // The single target every emplacement tracks. A missing or despawned
    // ship degrades to no acquisition and the guns idle.
    let target_position = {
        let mut query = world.query::<(&PlayerShip, &Transform)>();
        query
            .iter()
            .next()
            .map(|(_, (_, transform))| transform.translation)
    };

    let mut updates: Vec<TurretUpdate> = Vec::new();
    let mut shots: Vec<PendingShot> = Vec::new();

    {
        let mut query = world.query::<(&Turret, &TurretConfig, &TurretState)>();
        for (entity, (turret, config, state)) in query.iter() {
            if state.status != TurretStatus::Active {
                continue;
            }
            let world_tf = match hierarchy::world_transform(world, entity) {
                Some(t) => t,
                None => continue,
            };

            let mut update = TurretUpdate {
                entity,
                firing_rate: config.firing_rate,
                new_local_rotation: None,
                fired: false,
            };

            if let Some(target) = target_position {
                // (a) acquisition: the first body along the ray must be the
                // player. The cast skips the emplacement itself and
                // in-flight ordnance; any solid body in between blocks
                // engagement for this tick.
                let self_id = entity.to_bits().get();
                let acquired = cast_ray(bodies, world_tf.translation, target, config.range, |b| {
                    b.id == self_id || b.tag == BodyTag::Bullet
                })
                .map_or(false, |hit| bodies[hit.index].tag == BodyTag::Player);

                if acquired {
                    // (b) rotational tracking.
                    let new_world_rotation = tracking::steer_toward(
                        world_tf.rotation,
                        world_tf.translation,
                        target,
                        config.turning_rate_deg,
                        DT,
                    );
                    let parent_rotation = hierarchy::parent_world_rotation(world, entity);
                    update.new_local_rotation = Some(parent_rotation.inverse() * new_world_rotation);

                    // (c) fire control, from the post-slew facing.
                    if state.firing_cooldown <= 0.0 {
                        let forward = new_world_rotation * DVec3::NEG_Z;
                        shots.push(PendingShot {
                            emplacement_number: turret.emplacement_number,
                            muzzle: Transform {
                                translation: world_tf.translation
                                    + forward * config.bullet_spawn_offset,
                                rotation: new_world_rotation,
                                scale: DVec3::ONE,
                            },
                            speed: config.bullet_speed,
                            color: config.bullet_color,
                            volume: config.firing_volume,
                        });
                        update.fired = true;
                    }
                }
            }

            updates.push(update);
        }
    }

    for update in updates {
        if let Some(rotation) = update.new_local_rotation {
            if let Ok(mut transform) = world.get::<&mut Transform>(update.entity) {
                transform.rotation = rotation;
            }
        }
        if let Ok(mut state) = world.get::<&mut TurretState>(update.entity) {
            if update.fired && gunnery::try_fire(&mut state.firing_cooldown) {
                score.shots_fired += 1;
            }
            // (d) cooldown decay runs unconditionally, including on firing ticks.
            gunnery::decay(&mut state.firing_cooldown, update.firing_rate, DT);
        }
    }

    for shot in shots {
        world_setup::spawn_bullet(world, shot.muzzle, shot.speed, shot.color);
        audio_events.push(AudioEvent::TurretFired {
            emplacement_number: shot.emplacement_number,
            volume: shot.volume,
        });
    }
}
