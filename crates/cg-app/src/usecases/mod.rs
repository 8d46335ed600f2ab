//! Business logic use cases
//!
//! Each use case has a `new()` constructor taking its ports and a single
//! `execute()` entry point. The UI shell obtains instances through
//! [`UseCases`], which pre-wires the shared controller and ports.

pub mod access;

pub use access::{AccessStateDto, ActivateAccessGate, DeactivateAccessGate, GetAccessState};

#[cfg(feature = "debug-override")]
pub use access::ToggleSubscriptionOverride;

use std::sync::Arc;

use cg_core::ports::EntitlementsPort;

use access::AccessController;

/// Accessor handing out use cases with their dependencies pre-wired.
pub struct UseCases {
    controller: Arc<AccessController>,
    entitlements: Arc<dyn EntitlementsPort>,
}

impl UseCases {
    /// Wire the accessor from the shared controller and ports.
    pub fn new(controller: Arc<AccessController>, entitlements: Arc<dyn EntitlementsPort>) -> Self {
        Self {
            controller,
            entitlements,
        }
    }

    /// Mount the access gate and kick off entitlement resolution.
    pub fn activate_access_gate(&self) -> ActivateAccessGate {
        ActivateAccessGate::new(
            Arc::clone(&self.controller),
            Arc::clone(&self.entitlements),
        )
    }

    /// Unmount the access gate.
    pub fn deactivate_access_gate(&self) -> DeactivateAccessGate {
        DeactivateAccessGate::new(Arc::clone(&self.controller))
    }

    /// Read the current access state for rendering.
    pub fn get_access_state(&self) -> GetAccessState {
        GetAccessState::new(Arc::clone(&self.controller))
    }

    /// Flip the access state by hand (debug builds only).
    #[cfg(feature = "debug-override")]
    pub fn toggle_subscription_override(&self) -> ToggleSubscriptionOverride {
        ToggleSubscriptionOverride::new(Arc::clone(&self.controller))
    }
}
