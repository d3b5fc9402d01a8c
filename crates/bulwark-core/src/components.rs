//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Systems own the behavior; components only carry state.

use glam::{DQuat, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{BodyTag, TurretStatus};

/// Local-space transform: translation, rotation, and scale relative to the
/// entity's parent (or to the world when it has none).
///
/// Convention: forward is -Z, up is +Y.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub translation: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
        scale: DVec3::ONE,
    };

    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// The forward axis (-Z) in this transform's space.
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::NEG_Z
    }

    /// The up axis (+Y) in this transform's space.
    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Map a point from this transform's local space into its parent space.
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.translation + self.rotation * (self.scale * point)
    }

    /// Compose with a child transform: `self` is the parent.
    pub fn mul_transform(&self, child: &Transform) -> Transform {
        Transform {
            translation: self.transform_point(child.translation),
            rotation: self.rotation * child.rotation,
            scale: self.scale * child.scale,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Linear velocity in world space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

impl Velocity {
    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

/// Participation in physics queries: a tagged bounding sphere.
/// The world-space radius scales with the largest transform scale axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub tag: BodyTag,
    pub radius: f64,
}

/// Marks an entity as a turret emplacement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turret {
    /// Stable identifier assigned at spawn, used in views and events.
    pub emplacement_number: u32,
}

/// Mutable combat state of an emplacement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurretState {
    /// Remaining hit points. Monotonically non-increasing.
    pub health: i32,
    /// Normalized fire gate: ready when <= 0, reset to 1 on each shot.
    /// Decays by `dt * firing_rate` each tick; may overshoot negative.
    pub firing_cooldown: f64,
    pub status: TurretStatus,
}

impl TurretState {
    pub fn new(initial_health: i32) -> Self {
        Self {
            health: initial_health,
            firing_cooldown: 0.0,
            status: TurretStatus::Active,
        }
    }
}

/// Static per-emplacement configuration, read-only for the lifetime of the
/// instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurretConfig {
    /// Maximum engagement range (meters).
    pub range: f64,
    /// Traverse rate (degrees per second).
    pub turning_rate_deg: f64,
    /// Tracer color of fired rounds (RGBA).
    pub bullet_color: DVec4,
    /// Muzzle velocity of fired rounds (m/s).
    pub bullet_speed: f64,
    /// Distance along the forward axis at which rounds materialize.
    pub bullet_spawn_offset: f64,
    /// Cooldown decay multiplier (shots per second at reset 1.0).
    pub firing_rate: f64,
    /// Playback volume of the fire sound.
    pub firing_volume: f64,
    /// Hit points at spawn.
    pub initial_health: i32,
}

impl Default for TurretConfig {
    fn default() -> Self {
        Self {
            range: TURRET_RANGE,
            turning_rate_deg: TURRET_TURNING_RATE_DEG,
            bullet_color: TURRET_BULLET_COLOR,
            bullet_speed: TURRET_BULLET_SPEED,
            bullet_spawn_offset: TURRET_BULLET_SPAWN_OFFSET,
            firing_rate: TURRET_FIRING_RATE,
            firing_volume: TURRET_FIRING_VOLUME,
            initial_health: TURRET_INITIAL_HEALTH,
        }
    }
}

/// Marks the player ship — the single target every emplacement tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Marks inert cover geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;

/// A round in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    /// Tracer color (RGBA).
    pub color: DVec4,
}
