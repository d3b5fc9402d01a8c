//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems at a fixed tick rate, and produces `SceneSnapshot`s.
//! Completely headless (no rendering or audio backend), enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use bulwark_core::commands::PlayerCommand;
use bulwark_core::components::{PlayerShip, Transform, Velocity};
use bulwark_core::constants::*;
use bulwark_core::enums::{ScenarioId, ScenePhase};
use bulwark_core::events::AudioEvent;
use bulwark_core::state::SceneSnapshot;
use bulwark_core::types::SimTime;
use bulwark_physics::{Body, ContactTracker};
use bulwark_turret_ai::tracking;

use crate::{scenario, systems, world_setup};

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Scenario populated by `StartScenario`.
    pub scenario: ScenarioId,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenario: ScenarioId::default(),
        }
    }
}

/// Running score kept by the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    /// Rounds released by emplacements.
    pub shots_fired: u32,
    pub turrets_destroyed: u32,
    pub turrets_total: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: ScenePhase,
    scenario: ScenarioId,
    rng: ChaCha8Rng,
    next_emplacement_number: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    body_buffer: Vec<Body>,
    body_entities: Vec<Entity>,
    contact_buffer: Vec<(usize, usize)>,
    contact_tracker: ContactTracker,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: ScenePhase::default(),
            scenario: config.scenario,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_emplacement_number: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            body_buffer: Vec::new(),
            body_entities: Vec::new(),
            contact_buffer: Vec::new(),
            contact_tracker: ContactTracker::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SceneSnapshot {
        self.process_commands();

        if self.phase == ScenePhase::Active {
            self.run_systems();
            self.time.advance();

            if self.score.turrets_total > 0
                && self.score.turrets_destroyed >= self.score.turrets_total
            {
                self.phase = ScenePhase::Cleared;
                info!(tick = self.time.tick, "all emplacements destroyed, scene cleared");
            }
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.scenario,
            audio_events,
            &self.score,
        )
    }

    /// Get the current scene phase.
    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the current score.
    pub fn score(&self) -> ScoreState {
        self.score
    }

    /// Spawn an additional emplacement (for tests).
    #[cfg(test)]
    pub fn spawn_test_turret(
        &mut self,
        local: Transform,
        config: bulwark_core::components::TurretConfig,
    ) -> Entity {
        let number = self.next_emplacement_number;
        self.next_emplacement_number += 1;
        self.score.turrets_total += 1;
        world_setup::spawn_turret(&mut self.world, number, None, local, config)
    }

    /// Spawn a free-flying round (for tests).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, muzzle: Transform, speed: f64) -> Entity {
        world_setup::spawn_bullet(&mut self.world, muzzle, speed, PLAYER_BULLET_COLOR)
    }

    /// Remove the player ship (for tests of target-loss hardening).
    #[cfg(test)]
    pub fn despawn_player_ship(&mut self) {
        let ship = {
            let mut query = self.world.query::<&PlayerShip>();
            query.iter().next().map(|(entity, _)| entity)
        };
        if let Some(entity) = ship {
            let _ = self.world.despawn(entity);
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartScenario => {
                if self.phase == ScenePhase::Staging {
                    let total = scenario::populate(
                        &mut self.world,
                        &mut self.rng,
                        self.scenario,
                        &mut self.next_emplacement_number,
                    );
                    self.score = ScoreState {
                        turrets_total: total,
                        ..ScoreState::default()
                    };
                    self.time = SimTime::default();
                    self.phase = ScenePhase::Active;
                    info!(scenario = ?self.scenario, emplacements = total, "scenario started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == ScenePhase::Active {
                    self.phase = ScenePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == ScenePhase::Paused {
                    self.phase = ScenePhase::Active;
                }
            }
            PlayerCommand::SetVelocity { velocity } => {
                let velocity = velocity.clamp_length_max(PLAYER_MAX_SPEED);
                for (_entity, (_ship, vel, transform)) in self
                    .world
                    .query_mut::<(&PlayerShip, &mut Velocity, &mut Transform)>()
                {
                    vel.0 = velocity;
                    // The ship turns to face its motion.
                    if velocity.length_squared() > 0.0 {
                        transform.rotation = tracking::look_rotation(velocity, transform.up());
                    }
                }
            }
            PlayerCommand::FireWeapon => {
                if self.phase != ScenePhase::Active {
                    return;
                }
                let muzzle = {
                    let mut query = self.world.query::<(&PlayerShip, &Transform)>();
                    query.iter().next().map(|(_, (_, transform))| Transform {
                        translation: transform.translation
                            + transform.forward() * PLAYER_BULLET_SPAWN_OFFSET,
                        rotation: transform.rotation,
                        scale: glam::DVec3::ONE,
                    })
                };
                if let Some(muzzle) = muzzle {
                    world_setup::spawn_bullet(
                        &mut self.world,
                        muzzle,
                        PLAYER_BULLET_SPEED,
                        PLAYER_BULLET_COLOR,
                    );
                    self.audio_events.push(AudioEvent::PlayerFired {
                        volume: PLAYER_FIRING_VOLUME,
                    });
                    debug!("player weapon fired");
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Kinematic integration
        systems::movement::run(&mut self.world);
        // 2. Flatten colliders into one consistent body list for the tick
        systems::contacts::collect_bodies(
            &self.world,
            &mut self.body_buffer,
            &mut self.body_entities,
        );
        // 3. Contact-enter detection
        systems::contacts::run(
            &mut self.contact_tracker,
            &self.body_buffer,
            &mut self.contact_buffer,
        );
        // 4. Damage / destruction state machine
        systems::damage::run(
            &mut self.world,
            &self.body_buffer,
            &self.body_entities,
            &self.contact_buffer,
            &mut self.audio_events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 5. Turret controllers (acquisition, tracking, fire, cooldown)
        systems::turret::run(
            &mut self.world,
            &self.body_buffer,
            &mut self.audio_events,
            &mut self.score,
        );
        // 6. Cleanup (destroyed, expended, out of bounds)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
