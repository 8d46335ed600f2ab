//! Application dependency grouping
//!
//! This is NOT a Builder pattern: no build steps, no default values, no
//! hidden logic. Just parameter grouping for [`crate::App`] construction.

use std::sync::Arc;

use cg_core::ports::EntitlementsPort;

/// Dependencies required to construct the application.
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    /// Entitlement provider capability. Injected rather than reached for as
    /// ambient state so tests can supply a scripted fake (success, failure,
    /// never-resolving).
    pub entitlements: Arc<dyn EntitlementsPort>,
}
