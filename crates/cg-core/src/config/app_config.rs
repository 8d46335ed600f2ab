//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Contains only the configuration needed by the application layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Entitlement provider settings
    pub entitlements: EntitlementsConfig,
}

/// Entitlement provider configuration
///
/// The provider issues one API credential per store platform. A build
/// running on a platform with no credential here operates with an
/// uninitialized entitlement client and every query fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementsConfig {
    /// Base URL of the provider REST API
    pub base_url: String,
    /// Identifier of the signed-in user at the provider
    pub app_user_id: String,
    /// API credential for macOS builds
    pub macos_api_key: Option<String>,
    /// API credential for Windows builds
    pub windows_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            entitlements: EntitlementsConfig {
                base_url: "https://api.revenuecat.com".to_string(),
                app_user_id: String::new(),
                macos_api_key: None,
                windows_api_key: None,
            },
        }
    }
}
