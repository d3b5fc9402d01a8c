//! Player commands fed to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Populate the configured scenario and start the simulation.
    StartScenario,
    /// Freeze the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Set the ship's velocity. Speed is clamped to `PLAYER_MAX_SPEED`;
    /// a non-zero velocity also turns the ship to face its motion.
    SetVelocity { velocity: DVec3 },
    /// Fire one round from the ship's cannon along its forward axis.
    FireWeapon,
}
