//! Use case for mounting the access gate

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info_span, warn, Instrument};

use cg_core::ports::EntitlementsPort;

use super::controller::AccessController;
use super::resolve::ResolveAccess;

/// Use case for activating the gated screen.
///
/// Fire-and-forget: marks the gate mounted (which renders the fail-closed
/// locked branch immediately) and spawns the entitlement query in the
/// background so the initial render is never blocked on the network. The
/// resolved value is applied through the controller, which discards it if
/// the gate deactivated or re-activated while the query was in flight.
///
/// A failed query is deliberately not retried and not surfaced to the user:
/// the state keeps its locked default, which is visually indistinguishable
/// from "still pending". Only a fresh activation issues a new query.
pub struct ActivateAccessGate {
    controller: Arc<AccessController>,
    entitlements: Arc<dyn EntitlementsPort>,
}

impl ActivateAccessGate {
    /// Create a new ActivateAccessGate use case.
    pub fn new(controller: Arc<AccessController>, entitlements: Arc<dyn EntitlementsPort>) -> Self {
        Self {
            controller,
            entitlements,
        }
    }

    /// Mount the gate and kick off entitlement resolution.
    ///
    /// Returns the handle of the spawned resolution task. Callers are free
    /// to drop it; tests await it to observe settlement deterministically.
    pub fn execute(&self) -> JoinHandle<()> {
        let token = self.controller.activate();
        let controller = Arc::clone(&self.controller);
        let resolver = ResolveAccess::new(Arc::clone(&self.entitlements));
        let span = info_span!("usecase.access.activate");

        tokio::spawn(
            async move {
                match resolver.execute().await {
                    Ok(entitled) => {
                        if !controller.complete_resolution(token, entitled) {
                            debug!(entitled, "Discarding stale entitlement resolution");
                        }
                    }
                    Err(err) => {
                        // Fail closed: the state keeps its current value.
                        warn!(error = %err, "Entitlement query failed; gate stays locked");
                    }
                }
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use tokio::sync::Notify;

    use cg_core::access::{AccessState, GATED_ENTITLEMENT};
    use cg_core::entitlement::{Entitlement, EntitlementRecord};
    use cg_core::ports::EntitlementsError;

    struct StaticEntitlements {
        record: EntitlementRecord,
    }

    #[async_trait::async_trait]
    impl EntitlementsPort for StaticEntitlements {
        async fn current_record(&self) -> Result<EntitlementRecord, EntitlementsError> {
            Ok(self.record.clone())
        }
    }

    struct FailingEntitlements;

    #[async_trait::async_trait]
    impl EntitlementsPort for FailingEntitlements {
        async fn current_record(&self) -> Result<EntitlementRecord, EntitlementsError> {
            Err(EntitlementsError::Network("connection refused".to_string()))
        }
    }

    /// Never resolves; models a hung provider.
    struct HangingEntitlements;

    #[async_trait::async_trait]
    impl EntitlementsPort for HangingEntitlements {
        async fn current_record(&self) -> Result<EntitlementRecord, EntitlementsError> {
            std::future::pending().await
        }
    }

    /// Resolves only once the test releases it, so the test controls the
    /// ordering of resolution against other writes.
    struct GatedEntitlements {
        release: Arc<Notify>,
        record: EntitlementRecord,
    }

    #[async_trait::async_trait]
    impl EntitlementsPort for GatedEntitlements {
        async fn current_record(&self) -> Result<EntitlementRecord, EntitlementsError> {
            self.release.notified().await;
            Ok(self.record.clone())
        }
    }

    fn subscribed_record() -> EntitlementRecord {
        let mut active = HashMap::new();
        active.insert(
            GATED_ENTITLEMENT.to_string(),
            Entitlement {
                product_identifier: "premium_cats_monthly".to_string(),
                purchase_date: "2024-06-01T12:00:00Z".parse().unwrap(),
                expires_date: None,
            },
        );
        EntitlementRecord::from_active(active)
    }

    #[tokio::test]
    async fn test_locked_while_query_pending() {
        let controller = Arc::new(AccessController::new());
        let use_case =
            ActivateAccessGate::new(Arc::clone(&controller), Arc::new(HangingEntitlements));

        let _handle = use_case.execute();

        // The query never resolves; the gate renders its fail-closed default.
        assert_eq!(controller.state(), AccessState::Locked);
    }

    #[tokio::test]
    async fn test_subscribed_user_unlocks_after_resolution() {
        let controller = Arc::new(AccessController::new());
        let use_case = ActivateAccessGate::new(
            Arc::clone(&controller),
            Arc::new(StaticEntitlements {
                record: subscribed_record(),
            }),
        );

        use_case.execute().await.unwrap();

        assert!(controller.unlocked());
    }

    #[tokio::test]
    async fn test_unsubscribed_user_stays_locked() {
        let controller = Arc::new(AccessController::new());
        let use_case = ActivateAccessGate::new(
            Arc::clone(&controller),
            Arc::new(StaticEntitlements {
                record: EntitlementRecord::empty(),
            }),
        );

        use_case.execute().await.unwrap();

        assert_eq!(controller.state(), AccessState::Locked);
    }

    #[tokio::test]
    async fn test_query_failure_leaves_gate_locked() {
        let controller = Arc::new(AccessController::new());
        let use_case =
            ActivateAccessGate::new(Arc::clone(&controller), Arc::new(FailingEntitlements));

        // The task settles without panicking and without mutating state.
        use_case.execute().await.unwrap();

        assert_eq!(controller.state(), AccessState::Locked);
    }

    #[tokio::test]
    async fn test_late_resolution_after_deactivation_is_discarded() {
        let controller = Arc::new(AccessController::new());
        let release = Arc::new(Notify::new());
        let use_case = ActivateAccessGate::new(
            Arc::clone(&controller),
            Arc::new(GatedEntitlements {
                release: Arc::clone(&release),
                record: subscribed_record(),
            }),
        );

        let handle = use_case.execute();
        let mut rx = controller.subscribe();
        rx.mark_unchanged();

        controller.deactivate();
        release.notify_one();
        handle.await.unwrap();

        // No observable mutation: the entitled result never landed.
        assert_eq!(controller.state(), AccessState::Locked);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_reactivation_supersedes_outstanding_query() {
        let controller = Arc::new(AccessController::new());
        let release = Arc::new(Notify::new());

        let first = ActivateAccessGate::new(
            Arc::clone(&controller),
            Arc::new(GatedEntitlements {
                release: Arc::clone(&release),
                record: subscribed_record(),
            }),
        );
        let first_handle = first.execute();

        // Screen re-entry with a fresh query against an unsubscribed record.
        let second = ActivateAccessGate::new(
            Arc::clone(&controller),
            Arc::new(StaticEntitlements {
                record: EntitlementRecord::empty(),
            }),
        );
        second.execute().await.unwrap();

        // The first query resolves entitled, but its activation is stale.
        release.notify_one();
        first_handle.await.unwrap();

        assert_eq!(controller.state(), AccessState::Locked);
    }

    #[cfg(feature = "debug-override")]
    #[tokio::test]
    async fn test_resolution_overwrites_earlier_override() {
        let controller = Arc::new(AccessController::new());
        let release = Arc::new(Notify::new());
        let use_case = ActivateAccessGate::new(
            Arc::clone(&controller),
            Arc::new(GatedEntitlements {
                release: Arc::clone(&release),
                record: subscribed_record(),
            }),
        );

        let handle = use_case.execute();

        // Override lands first, the query later; whichever completes last wins.
        controller.set_override(false);
        assert!(!controller.unlocked());

        release.notify_one();
        handle.await.unwrap();

        assert!(controller.unlocked());
    }
}
