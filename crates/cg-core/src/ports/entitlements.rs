//! Entitlement provider port
//!
//! This port defines the contract for reading the signed-in user's current
//! entitlement record from the purchase/entitlement provider. Implementations
//! are provided by the infrastructure layer (e.g., the provider's REST API).

use async_trait::async_trait;

use crate::entitlement::EntitlementRecord;
use crate::ports::errors::EntitlementsError;

#[async_trait]
pub trait EntitlementsPort: Send + Sync {
    /// Fetch a fresh snapshot of the user's currently active entitlements.
    ///
    /// Network-bound and may suspend for an unbounded duration; the core
    /// imposes no timeout and no retry. Querying a client that was never
    /// initialized fails with [`EntitlementsError::NotConfigured`].
    async fn current_record(&self) -> Result<EntitlementRecord, EntitlementsError>;
}
