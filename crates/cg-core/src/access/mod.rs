//! Access-gating domain models.

pub mod state;

pub use state::AccessState;

/// Identifier of the entitlement that unlocks this deployment's gated
/// content. Fixed at compile time; changing the gated entitlement requires
/// changing this constant.
pub const GATED_ENTITLEMENT: &str = "Premium Cats";
