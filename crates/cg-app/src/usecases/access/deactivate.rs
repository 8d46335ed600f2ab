use std::sync::Arc;

use super::controller::AccessController;

/// Use case for deactivating the gated screen.
///
/// Marks the gate unmounted so any entitlement query still in flight is
/// discarded when it resolves instead of mutating a no-longer-rendered
/// state. A later activation re-queries from scratch.
pub struct DeactivateAccessGate {
    controller: Arc<AccessController>,
}

impl DeactivateAccessGate {
    /// Create a new DeactivateAccessGate use case.
    pub fn new(controller: Arc<AccessController>) -> Self {
        Self { controller }
    }

    /// Unmount the gate.
    pub fn execute(&self) {
        self.controller.deactivate();
    }
}
