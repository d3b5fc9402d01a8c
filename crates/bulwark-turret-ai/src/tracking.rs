//! Rotational tracking — look-at construction and rate-limited slewing.
//!
//! The slew is a fractional-remaining-angle blend: each tick covers
//! `turning_rate * dt` degrees of whatever separation remains, snapping once
//! the separation falls inside the step.

use glam::{DMat3, DQuat, DVec3};

/// Separations below this (degrees) count as already facing the target.
const ALIGNMENT_EPSILON_DEG: f64 = 1e-9;

/// Orientation whose forward axis (-Z) points along `forward` with `up` as
/// the vertical reference.
///
/// Degenerate inputs are absorbed: a zero `forward` yields identity, a zero
/// or parallel `up` falls back to a perpendicular reference axis.
pub fn look_rotation(forward: DVec3, up: DVec3) -> DQuat {
    let f = forward.normalize_or_zero();
    if f == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    let back = -f;

    let mut up_ref = up.normalize_or_zero();
    if up_ref == DVec3::ZERO {
        up_ref = DVec3::Y;
    }

    let mut right = up_ref.cross(back);
    if right.length_squared() < 1e-12 {
        // Looking straight along the up reference; any perpendicular works.
        let fallback = if f.x.abs() < 0.9 { DVec3::X } else { DVec3::Z };
        right = fallback.cross(back);
    }
    let right = right.normalize();
    let up_ortho = back.cross(right);

    DQuat::from_mat3(&DMat3::from_cols(right, up_ortho, back))
}

/// Angle between two directions in degrees. Zero-length inputs count as
/// aligned rather than propagating NaN.
pub fn angular_separation_deg(a: DVec3, b: DVec3) -> f64 {
    let a = a.normalize_or_zero();
    let b = b.normalize_or_zero();
    if a == DVec3::ZERO || b == DVec3::ZERO {
        return 0.0;
    }
    a.angle_between(b).to_degrees()
}

/// Fraction of the remaining separation covered this tick, clamped to
/// `[0, 1]`. A near-zero separation yields 1 (snap) instead of a division
/// artifact.
pub fn blend_fraction(turning_rate_deg: f64, dt: f64, separation_deg: f64) -> f64 {
    if separation_deg <= ALIGNMENT_EPSILON_DEG {
        return 1.0;
    }
    (turning_rate_deg * dt / separation_deg).clamp(0.0, 1.0)
}

/// One tick of rotational tracking: slew `current` toward facing `target`
/// from `eye`, keeping the current up axis as the vertical reference.
///
/// Returns the new orientation; a degenerate direction (target at the eye)
/// leaves the orientation unchanged.
pub fn steer_toward(
    current: DQuat,
    eye: DVec3,
    target: DVec3,
    turning_rate_deg: f64,
    dt: f64,
) -> DQuat {
    let to_target = target - eye;
    if to_target.normalize_or_zero() == DVec3::ZERO {
        return current;
    }

    let desired = look_rotation(to_target, current * DVec3::Y);
    let separation = angular_separation_deg(current * DVec3::NEG_Z, to_target);
    let progress = blend_fraction(turning_rate_deg, dt, separation);

    current.slerp(desired, progress)
}
