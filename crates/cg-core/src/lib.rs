//! # cg-core
//!
//! Core domain models and business logic for CatGate.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod access;
pub mod config;
pub mod entitlement;
pub mod platform;
pub mod ports;

// Re-export commonly used types at the crate root
pub use access::{AccessState, GATED_ENTITLEMENT};
pub use config::AppConfig;
pub use entitlement::{Entitlement, EntitlementRecord};
pub use platform::Platform;
