//! Scene snapshot — the complete visible state produced after each tick.

use glam::{DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete scene state built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub phase: ScenePhase,
    pub scenario: ScenarioId,
    /// Absent when the ship has been removed from the scene.
    pub ship: Option<ShipView>,
    pub turrets: Vec<TurretView>,
    pub bullets: Vec<BulletView>,
    pub audio_events: Vec<AudioEvent>,
    pub score: ScoreView,
}

/// Player ship state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: DVec3,
    pub velocity: DVec3,
}

/// One emplacement's state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretView {
    pub emplacement_number: u32,
    /// World-space position.
    pub position: DVec3,
    /// World-space forward axis.
    pub facing: DVec3,
    pub health: i32,
    pub firing_cooldown: f64,
    pub status: TurretStatus,
}

/// One round in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: DVec3,
    pub velocity: DVec3,
    pub color: DVec4,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    /// Rounds fired by emplacements.
    pub shots_fired: u32,
    pub turrets_destroyed: u32,
    pub turrets_total: u32,
}
