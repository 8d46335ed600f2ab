//! Debug affordance: flip the access state by hand
//!
//! Compiled only with the `debug-override` feature so the capability cannot
//! exist in a production build. The override writes into the same state
//! slot as real entitlement resolutions and does not cancel an in-flight
//! query; whichever write lands last wins.

use std::sync::Arc;

use tracing::info;

use super::controller::AccessController;
use super::AccessStateDto;

/// Use case for toggling the subscription state by hand.
pub struct ToggleSubscriptionOverride {
    controller: Arc<AccessController>,
}

impl ToggleSubscriptionOverride {
    /// Create a new ToggleSubscriptionOverride use case.
    pub fn new(controller: Arc<AccessController>) -> Self {
        Self { controller }
    }

    /// Flip the access state. Returns the state after the flip.
    pub fn execute(&self) -> AccessStateDto {
        let state = self.controller.toggle_override();
        info!(unlocked = state.is_unlocked(), "Subscription override toggled");

        AccessStateDto {
            unlocked: state.is_unlocked(),
        }
    }
}
