//! Fallback adapter for platforms without a provider credential
//!
//! Querying a client that was never configured is provider-defined
//! behavior; the core treats it as a failure case, so this adapter fails
//! every query explicitly instead of guessing.

use async_trait::async_trait;

use cg_core::entitlement::EntitlementRecord;
use cg_core::ports::{EntitlementsError, EntitlementsPort};

pub struct NotConfiguredEntitlements;

#[async_trait]
impl EntitlementsPort for NotConfiguredEntitlements {
    async fn current_record(&self) -> Result<EntitlementRecord, EntitlementsError> {
        Err(EntitlementsError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_query_fails() {
        let client = NotConfiguredEntitlements;

        assert!(matches!(
            client.current_record().await,
            Err(EntitlementsError::NotConfigured)
        ));
    }
}
