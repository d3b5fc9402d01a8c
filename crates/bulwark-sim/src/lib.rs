//! Simulation engine for BULWARK.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces SceneSnapshots for a frontend.

pub mod engine;
pub mod hierarchy;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::SimulationEngine;
