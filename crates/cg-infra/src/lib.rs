//! # cg-infra
//!
//! Infrastructure adapters for CatGate: the entitlement provider HTTP
//! client, the unconfigured-platform fallback, config loading, and the
//! system clock.

pub mod config;
pub mod entitlements;
pub mod time;

pub use config::load_config;
pub use entitlements::{configure_entitlements, NotConfiguredEntitlements, RevenueCatClient};
pub use time::SystemClock;
