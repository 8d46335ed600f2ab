//! Access-gate use cases
//!
//! The flow mirrors the gated screen's lifecycle:
//!
//! ```text
//! [screen mounts]
//!       ↓
//! ActivateAccessGate ──spawns──→ ResolveAccess ──→ AccessController
//!       ↓                                               ↑
//! GetAccessState → UI branch            ToggleSubscriptionOverride (debug)
//!       ↓
//! DeactivateAccessGate   (screen unmounts; late results are discarded)
//! ```

pub mod activate;
pub mod controller;
pub mod deactivate;
pub mod get_state;
pub mod resolve;

#[cfg(feature = "debug-override")]
pub mod toggle_override;

pub use activate::ActivateAccessGate;
pub use controller::{AccessController, ActivationToken};
pub use deactivate::DeactivateAccessGate;
pub use get_state::GetAccessState;
pub use resolve::ResolveAccess;

#[cfg(feature = "debug-override")]
pub use toggle_override::ToggleSubscriptionOverride;

/// Route of the purchase screen the locked branch links to. Opaque to the
/// core; whatever happens there only becomes visible again through a fresh
/// activation and query cycle.
pub const PAYWALL_ROUTE: &str = "/subscription";

/// Presentation snapshot of the access gate.
///
/// The rendered UI branch is a pure function of this value: `unlocked`
/// selects the full-content branch, everything else (pending query, failed
/// query, not subscribed) renders the locked branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccessStateDto {
    /// Whether the gated content is fully visible
    pub unlocked: bool,
}
