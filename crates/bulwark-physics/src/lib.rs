//! Physics queries for BULWARK.
//!
//! Ray casts against tagged bodies and contact-enter detection over plain
//! body lists. No ECS dependency — the sim crate collects world state into
//! `Body` records each tick and hands them here.

pub mod contact;
pub mod ray;

pub use contact::ContactTracker;
pub use ray::{cast_ray, Body, RayHit};
