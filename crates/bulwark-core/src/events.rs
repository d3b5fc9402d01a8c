//! Events emitted by the simulation for audio feedback.
//!
//! Playback is fire-and-forget: events are drained into each snapshot and
//! never sequenced — overlapping plays are allowed.

use serde::{Deserialize, Serialize};

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// An emplacement fired one round.
    TurretFired { emplacement_number: u32, volume: f64 },
    /// The player ship fired one round.
    PlayerFired { volume: f64 },
    /// An emplacement was destroyed.
    TurretExploded { emplacement_number: u32 },
}
