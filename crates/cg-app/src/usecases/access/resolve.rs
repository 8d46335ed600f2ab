//! Use case for resolving content access from the entitlement provider

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use cg_core::access::GATED_ENTITLEMENT;
use cg_core::ports::EntitlementsPort;

/// Use case for checking whether the user is entitled to the gated content.
///
/// Issues one query to the entitlement provider and maps the returned
/// record against [`GATED_ENTITLEMENT`]. Pure query-and-map: no state is
/// mutated here and no failure is caught — errors propagate to the invoking
/// context, whose fail-closed default is the safe fallback.
pub struct ResolveAccess {
    entitlements: Arc<dyn EntitlementsPort>,
}

impl ResolveAccess {
    /// Create a new ResolveAccess use case.
    pub fn new(entitlements: Arc<dyn EntitlementsPort>) -> Self {
        Self { entitlements }
    }

    /// Execute the use case.
    ///
    /// # Returns
    /// - `Ok(true)` if the gated entitlement is active for the user
    /// - `Ok(false)` otherwise (not subscribed is a normal outcome, not an error)
    /// - `Err(e)` if the provider query fails
    pub async fn execute(&self) -> Result<bool> {
        let span = info_span!("usecase.access.resolve");

        async {
            let record = self.entitlements.current_record().await?;
            let entitled = record.is_active(GATED_ENTITLEMENT);

            info!(entitled, active = record.len(), "Entitlement record resolved");
            Ok(entitled)
        }
        .instrument(span)
        .await
    }
}
