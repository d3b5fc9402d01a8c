//! Serde round-trip and geometry tests for the core vocabulary.

use glam::{DQuat, DVec3};

use crate::commands::PlayerCommand;
use crate::components::{Transform, TurretConfig, TurretState, Velocity};
use crate::constants::*;
use crate::enums::*;
use crate::events::AudioEvent;
use crate::state::SceneSnapshot;
use crate::types::SimTime;

#[test]
fn test_body_tag_serde() {
    let variants = vec![
        BodyTag::Player,
        BodyTag::Turret,
        BodyTag::Bullet,
        BodyTag::Obstacle,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: BodyTag = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_scene_phase_serde() {
    let variants = vec![
        ScenePhase::Staging,
        ScenePhase::Active,
        ScenePhase::Paused,
        ScenePhase::Cleared,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: ScenePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_destruction_cause_serde() {
    let variants = vec![
        DestructionCause::HealthDepleted,
        DestructionCause::ShipCollision,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: DestructionCause = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

/// Verify PlayerCommand round-trips through serde (tagged union).
#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::StartScenario,
        PlayerCommand::Pause,
        PlayerCommand::Resume,
        PlayerCommand::SetVelocity {
            velocity: DVec3::new(1.0, 0.0, -3.0),
        },
        PlayerCommand::FireWeapon,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        // Compare JSON representations since PlayerCommand doesn't derive PartialEq
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

/// Verify AudioEvent round-trips through serde.
#[test]
fn test_audio_event_serde() {
    let events = vec![
        AudioEvent::TurretFired {
            emplacement_number: 3,
            volume: TURRET_FIRING_VOLUME,
        },
        AudioEvent::PlayerFired {
            volume: PLAYER_FIRING_VOLUME,
        },
        AudioEvent::TurretExploded {
            emplacement_number: 3,
        },
    ];
    for event in &events {
        let json = serde_json::to_string(event).unwrap();
        let _back: AudioEvent = serde_json::from_str(&json).unwrap();
    }
}

/// Verify SceneSnapshot can be serialized to JSON.
#[test]
fn test_snapshot_serde() {
    let snapshot = SceneSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SceneSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert_eq!(snapshot.phase, back.phase);
    assert!(
        json.len() < 1024,
        "Empty snapshot should be <1KB, was {} bytes",
        json.len()
    );
}

#[test]
fn test_transform_axes() {
    let t = Transform::IDENTITY;
    assert!((t.forward() - DVec3::NEG_Z).length() < 1e-12);
    assert!((t.up() - DVec3::Y).length() < 1e-12);

    // Yaw 90° left: forward (-Z) rotates onto -X.
    let yawed = Transform {
        rotation: DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2),
        ..Transform::IDENTITY
    };
    assert!(
        (yawed.forward() - DVec3::NEG_X).length() < 1e-9,
        "90° yaw should point forward at -X, got {:?}",
        yawed.forward()
    );
}

#[test]
fn test_transform_point() {
    let t = Transform {
        translation: DVec3::new(10.0, 0.0, 0.0),
        rotation: DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2),
        scale: DVec3::splat(2.0),
    };
    // Local (0, 0, -1) scales to (0, 0, -2), yaws onto (-2, 0, 0), then translates.
    let p = t.transform_point(DVec3::NEG_Z);
    assert!(
        (p - DVec3::new(8.0, 0.0, 0.0)).length() < 1e-9,
        "Expected (8, 0, 0), got {p:?}"
    );
}

#[test]
fn test_transform_compose() {
    let parent = Transform {
        translation: DVec3::new(0.0, 0.0, -50.0),
        rotation: DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2),
        scale: DVec3::ONE,
    };
    let child = Transform::from_translation(DVec3::new(0.0, 3.0, 0.0));

    let world = parent.mul_transform(&child);
    assert!((world.translation - DVec3::new(0.0, 3.0, -50.0)).length() < 1e-9);
    // Child inherits the parent's facing.
    assert!((world.forward() - DVec3::NEG_X).length() < 1e-9);
}

#[test]
fn test_velocity_speed() {
    let v = Velocity(DVec3::new(3.0, 4.0, 0.0));
    assert!((v.speed() - 5.0).abs() < 1e-10);
}

#[test]
fn test_turret_state_new() {
    let state = TurretState::new(TURRET_INITIAL_HEALTH);
    assert_eq!(state.health, 5);
    assert_eq!(state.status, TurretStatus::Active);
    // A fresh emplacement is ready to fire immediately.
    assert!(state.firing_cooldown <= 0.0);
}

#[test]
fn test_turret_config_defaults() {
    let config = TurretConfig::default();
    assert!((config.range - 100.0).abs() < 1e-10);
    assert!((config.turning_rate_deg - 90.0).abs() < 1e-10);
    assert!((config.firing_rate - 2.0).abs() < 1e-10);
    assert!((config.bullet_speed - 35.0).abs() < 1e-10);
    assert_eq!(config.initial_health, 5);
    // Rounds must materialize clear of the emplacement's own collider.
    assert!(config.bullet_spawn_offset > TURRET_COLLIDER_RADIUS + BULLET_COLLIDER_RADIUS);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    assert_eq!(time.tick, 0);
    assert_eq!(time.elapsed_secs, 0.0);

    for _ in 0..60 {
        time.advance();
    }
    assert_eq!(time.tick, 60);
    // 60 ticks at 60Hz = 1 second
    assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
}
