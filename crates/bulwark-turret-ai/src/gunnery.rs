//! Fire-control gating.
//!
//! The gate is a normalized cooldown: ready when <= 0, reset to 1 on each
//! shot, decayed by `dt * firing_rate` every tick. The decay is not floored,
//! so the value may overshoot slightly negative before the next shot resets
//! it — readiness is defined as `<= 0`, never `== 0`.

use bulwark_core::constants::FIRING_COOLDOWN_RESET;

/// Attempt to expend the fire gate. Returns true when a shot should be
/// released and resets the cooldown; a failed attempt is a no-op and never
/// queues a pending shot.
pub fn try_fire(cooldown: &mut f64) -> bool {
    if *cooldown <= 0.0 {
        *cooldown = FIRING_COOLDOWN_RESET;
        true
    } else {
        false
    }
}

/// Decay the fire gate by one tick. Runs unconditionally every tick,
/// whether or not the target was acquired.
pub fn decay(cooldown: &mut f64, firing_rate: f64, dt: f64) {
    if *cooldown > 0.0 {
        *cooldown -= dt * firing_rate;
    }
}
