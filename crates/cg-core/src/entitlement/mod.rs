//! Entitlement domain models.

pub mod record;

pub use record::{Entitlement, EntitlementRecord};
