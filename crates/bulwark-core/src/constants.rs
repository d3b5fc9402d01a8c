//! Simulation constants and tuning parameters.

use glam::DVec4;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Radius of the playable volume in meters. Bullets beyond it are reclaimed.
pub const WORLD_RADIUS: f64 = 1_000.0;

// --- Turret emplacements ---

/// Maximum engagement range of an emplacement (meters).
pub const TURRET_RANGE: f64 = 100.0;

/// Traverse rate while tracking a target (degrees per second).
pub const TURRET_TURNING_RATE_DEG: f64 = 90.0;

/// Cooldown decay multiplier; at a reset value of 1.0 this is shots per second.
pub const TURRET_FIRING_RATE: f64 = 2.0;

/// Value the firing cooldown is reset to after each shot.
pub const FIRING_COOLDOWN_RESET: f64 = 1.0;

/// Muzzle velocity of emplacement rounds (m/s).
pub const TURRET_BULLET_SPEED: f64 = 35.0;

/// Distance along the forward axis at which rounds materialize (meters).
/// Must clear the emplacement's own collider plus the bullet's.
pub const TURRET_BULLET_SPAWN_OFFSET: f64 = 6.0;

/// Playback volume for the emplacement fire sound.
pub const TURRET_FIRING_VOLUME: f64 = 0.04;

/// Hit points of a fresh emplacement.
pub const TURRET_INITIAL_HEALTH: i32 = 5;

/// Tracer color of emplacement rounds (RGBA).
pub const TURRET_BULLET_COLOR: DVec4 = DVec4::new(1.0, 90.0 / 255.0, 90.0 / 255.0, 1.0);

/// Bounding-sphere radius of an emplacement (meters).
pub const TURRET_COLLIDER_RADIUS: f64 = 2.5;

// --- Bullets ---

/// Bounding-sphere radius of a bullet (meters).
pub const BULLET_COLLIDER_RADIUS: f64 = 0.25;

// --- Player ship ---

/// Bounding-sphere radius of the player ship (meters).
pub const PLAYER_COLLIDER_RADIUS: f64 = 1.5;

/// Speed cap applied to commanded ship velocity (m/s).
pub const PLAYER_MAX_SPEED: f64 = 40.0;

/// Muzzle velocity of the ship's cannon (m/s).
pub const PLAYER_BULLET_SPEED: f64 = 50.0;

/// Distance ahead of the ship at which its rounds materialize (meters).
pub const PLAYER_BULLET_SPAWN_OFFSET: f64 = 2.0;

/// Tracer color of ship rounds (RGBA).
pub const PLAYER_BULLET_COLOR: DVec4 = DVec4::new(0.35, 0.78, 1.0, 1.0);

/// Playback volume for the ship fire sound.
pub const PLAYER_FIRING_VOLUME: f64 = 0.08;
