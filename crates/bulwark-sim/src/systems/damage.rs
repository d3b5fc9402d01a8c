//! Damage system — delivers contact notifications and expends rounds.
//!
//! Emplacement reactions go through the damage state machine in
//! bulwark-turret-ai; bullets are expended on their first contact with
//! anything. Actual entity removal is deferred to the cleanup system.

use hecs::{Entity, World};
use tracing::debug;

use bulwark_core::components::{Turret, TurretState};
use bulwark_core::enums::BodyTag;
use bulwark_core::events::AudioEvent;
use bulwark_physics::Body;
use bulwark_turret_ai::damage::{apply_contact, ContactOutcome};

use crate::engine::ScoreState;

/// Process this tick's entering contacts.
pub fn run(
    world: &mut World,
    bodies: &[Body],
    entities: &[Entity],
    contacts: &[(usize, usize)],
    audio_events: &mut Vec<AudioEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) {
    for &(i, j) in contacts {
        notify(world, entities[i], bodies[j].tag, audio_events, score);
        notify(world, entities[j], bodies[i].tag, audio_events, score);

        // Rounds are expended on their first contact with anything.
        if bodies[i].tag == BodyTag::Bullet {
            despawn_buffer.push(entities[i]);
        }
        if bodies[j].tag == BodyTag::Bullet {
            despawn_buffer.push(entities[j]);
        }
    }
}

/// Deliver one side of a contact to the entity it concerns.
/// Only emplacements react; everything else shrugs it off.
fn notify(
    world: &mut World,
    entity: Entity,
    other_tag: BodyTag,
    audio_events: &mut Vec<AudioEvent>,
    score: &mut ScoreState,
) {
    let emplacement_number = match world.get::<&Turret>(entity) {
        Ok(turret) => turret.emplacement_number,
        Err(_) => return,
    };
    let mut state = match world.get::<&mut TurretState>(entity) {
        Ok(state) => state,
        Err(_) => return,
    };

    match apply_contact(&mut state, other_tag) {
        ContactOutcome::Destroyed { cause } => {
            debug!(emplacement = emplacement_number, ?cause, "emplacement destroyed");
            audio_events.push(AudioEvent::TurretExploded { emplacement_number });
            score.turrets_destroyed += 1;
        }
        ContactOutcome::Damaged { .. } | ContactOutcome::Ignored => {}
    }
}
