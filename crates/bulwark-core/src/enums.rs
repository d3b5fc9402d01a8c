//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Classification label carried by every physics body, used for
/// ray-cast and contact filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyTag {
    /// The player ship, the only thing emplacements engage.
    Player,
    /// A hostile turret emplacement.
    Turret,
    /// A round in flight, regardless of who fired it.
    Bullet,
    /// Inert cover (asteroids and debris).
    Obstacle,
}

/// Lifecycle state of a turret emplacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurretStatus {
    /// Tracking and firing normally.
    #[default]
    Active,
    /// Terminal, absorbing state. The entity is reclaimed at end of tick.
    Destroyed,
}

/// What finished an emplacement off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestructionCause {
    /// Health reached zero from accumulated bullet hits.
    HealthDepleted,
    /// Direct contact with the player ship.
    ShipCollision,
}

/// Top-level scene state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Engine constructed, no scenario populated yet.
    #[default]
    Staging,
    /// Simulation advancing.
    Active,
    /// Simulation frozen; time does not advance.
    Paused,
    /// Every emplacement has been destroyed.
    Cleared,
}

/// Built-in scenario layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// A single exposed emplacement. Fixed layout, no cover.
    #[default]
    ProvingGround,
    /// One emplacement dug in behind an asteroid on the approach axis.
    AsteroidScreen,
    /// A ring of emplacements at seeded-random bearings with scattered cover.
    Gauntlet,
}
