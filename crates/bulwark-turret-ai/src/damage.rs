//! Damage and destruction state machine.
//!
//! `Active(health > 0)` → `Destroyed`, terminal and absorbing. Transitions
//! are driven by contact notifications carrying the other body's tag.

use bulwark_core::components::TurretState;
use bulwark_core::enums::{BodyTag, DestructionCause, TurretStatus};

/// Result of feeding one contact notification to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The contact does not affect the emplacement.
    Ignored,
    /// A bullet hit; the emplacement survives with this much health.
    Damaged { remaining_health: i32 },
    /// The emplacement is done. Fired exactly once per instance.
    Destroyed { cause: DestructionCause },
}

/// Advance the state machine for one contact.
///
/// Notifications against an already-destroyed emplacement are no-ops, so
/// duplicate or late deliveries cannot re-trigger destruction.
pub fn apply_contact(state: &mut TurretState, other: BodyTag) -> ContactOutcome {
    if state.status == TurretStatus::Destroyed {
        return ContactOutcome::Ignored;
    }

    match other {
        BodyTag::Bullet => {
            state.health -= 1;
            if state.health <= 0 {
                state.health = state.health.max(0);
                state.status = TurretStatus::Destroyed;
                ContactOutcome::Destroyed {
                    cause: DestructionCause::HealthDepleted,
                }
            } else {
                ContactOutcome::Damaged {
                    remaining_health: state.health,
                }
            }
        }
        BodyTag::Player => {
            state.status = TurretStatus::Destroyed;
            ContactOutcome::Destroyed {
                cause: DestructionCause::ShipCollision,
            }
        }
        BodyTag::Turret | BodyTag::Obstacle => ContactOutcome::Ignored,
    }
}
