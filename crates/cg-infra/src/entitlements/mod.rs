//! Entitlement provider adapters
//!
//! The provider issues one API credential per store platform. Wiring picks
//! the credential for the running platform and builds the HTTP client;
//! platforms without a credential get the unconfigured fallback, whose
//! queries always fail and therefore keep the gate fail-closed.

pub mod not_configured;
pub mod revenuecat;

pub use not_configured::NotConfiguredEntitlements;
pub use revenuecat::{RevenueCatClient, RevenueCatConfig};

use std::sync::Arc;

use tracing::warn;

use cg_core::config::EntitlementsConfig;
use cg_core::ports::{ClockPort, EntitlementsPort};
use cg_core::Platform;

/// Select the provider API key for a platform.
///
/// Exactly two platforms carry credentials in this deployment; everything
/// else runs without an initialized client.
pub fn api_key_for(platform: Platform, config: &EntitlementsConfig) -> Option<&str> {
    match platform {
        Platform::MacOS => config.macos_api_key.as_deref(),
        Platform::Windows => config.windows_api_key.as_deref(),
        _ => None,
    }
}

/// Build the entitlement client for the given platform.
pub fn configure_entitlements(
    config: &EntitlementsConfig,
    platform: Platform,
    clock: Arc<dyn ClockPort>,
) -> Arc<dyn EntitlementsPort> {
    match api_key_for(platform, config) {
        Some(api_key) => Arc::new(RevenueCatClient::new(
            RevenueCatConfig {
                base_url: config.base_url.clone(),
                api_key: api_key.to_string(),
                app_user_id: config.app_user_id.clone(),
            },
            clock,
        )),
        None => {
            warn!(%platform, "No entitlement credential for platform; client left unconfigured");
            Arc::new(NotConfiguredEntitlements)
        }
    }
}
