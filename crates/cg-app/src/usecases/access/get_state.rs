use std::sync::Arc;

use super::controller::AccessController;
use super::AccessStateDto;

/// Use case for reading the current access state.
///
/// The only data crossing the presentation boundary from the core: a single
/// read-only boolean selecting which UI branch renders.
pub struct GetAccessState {
    controller: Arc<AccessController>,
}

impl GetAccessState {
    /// Create a new GetAccessState use case.
    pub fn new(controller: Arc<AccessController>) -> Self {
        Self { controller }
    }

    /// Snapshot the current access state.
    pub fn execute(&self) -> AccessStateDto {
        AccessStateDto {
            unlocked: self.controller.unlocked(),
        }
    }
}
