//! Builds the scene snapshot emitted after each tick.

use hecs::World;

use bulwark_core::components::{Bullet, PlayerShip, Transform, Turret, TurretState, Velocity};
use bulwark_core::enums::{ScenarioId, ScenePhase};
use bulwark_core::events::AudioEvent;
use bulwark_core::state::{BulletView, SceneSnapshot, ScoreView, ShipView, TurretView};
use bulwark_core::types::SimTime;

use crate::engine::ScoreState;
use crate::hierarchy;

/// Build a complete snapshot of the current world state.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: ScenePhase,
    scenario: ScenarioId,
    audio_events: Vec<AudioEvent>,
    score: &ScoreState,
) -> SceneSnapshot {
    let ship = {
        let mut query = world.query::<(&PlayerShip, &Transform, &Velocity)>();
        query.iter().next().map(|(_, (_, transform, velocity))| ShipView {
            position: transform.translation,
            velocity: velocity.0,
        })
    };

    let mut turrets: Vec<TurretView> = Vec::new();
    {
        let mut query = world.query::<(&Turret, &TurretState)>();
        for (entity, (turret, state)) in query.iter() {
            let world_tf = match hierarchy::world_transform(world, entity) {
                Some(t) => t,
                None => continue,
            };
            turrets.push(TurretView {
                emplacement_number: turret.emplacement_number,
                position: world_tf.translation,
                facing: world_tf.forward(),
                health: state.health,
                firing_cooldown: state.firing_cooldown,
                status: state.status,
            });
        }
    }
    turrets.sort_by_key(|t| t.emplacement_number);

    let mut bullets: Vec<BulletView> = Vec::new();
    {
        let mut query = world.query::<(&Bullet, &Transform, &Velocity)>();
        for (_entity, (bullet, transform, velocity)) in query.iter() {
            bullets.push(BulletView {
                position: transform.translation,
                velocity: velocity.0,
                color: bullet.color,
            });
        }
    }

    SceneSnapshot {
        time: *time,
        phase,
        scenario,
        ship,
        turrets,
        bullets,
        audio_events,
        score: ScoreView {
            shots_fired: score.shots_fired,
            turrets_destroyed: score.turrets_destroyed,
            turrets_total: score.turrets_total,
        },
    }
}
