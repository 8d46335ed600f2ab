//! RevenueCat entitlement client
//!
//! HTTP adapter implementing [`EntitlementsPort`] against the provider's
//! subscriber endpoint (`GET /v1/subscribers/{app_user_id}`). The wire
//! subscriber object carries every entitlement the user was ever granted;
//! this adapter keeps only those still active at query time, so the key set
//! of the returned domain record is exactly the active mapping.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use cg_core::entitlement::{Entitlement, EntitlementRecord};
use cg_core::ports::{ClockPort, EntitlementsError, EntitlementsPort};

#[derive(Debug, Clone)]
pub struct RevenueCatConfig {
    pub base_url: String,
    pub api_key: String,
    pub app_user_id: String,
}

pub struct RevenueCatClient {
    config: RevenueCatConfig,
    http: reqwest::Client,
    clock: Arc<dyn ClockPort>,
}

/// Wire shape of the subscriber endpoint response.
#[derive(Debug, Deserialize)]
struct SubscriberResponse {
    subscriber: Subscriber,
}

#[derive(Debug, Deserialize)]
struct Subscriber {
    #[serde(default)]
    entitlements: HashMap<String, WireEntitlement>,
}

#[derive(Debug, Deserialize)]
struct WireEntitlement {
    product_identifier: String,
    purchase_date: DateTime<Utc>,
    expires_date: Option<DateTime<Utc>>,
}

impl WireEntitlement {
    /// An entitlement is active while unexpired; `null` expiry is a
    /// lifetime grant.
    fn is_active_at(&self, now_ms: i64) -> bool {
        match self.expires_date {
            None => true,
            Some(expires) => expires.timestamp_millis() > now_ms,
        }
    }

    fn into_domain(self) -> Entitlement {
        Entitlement {
            product_identifier: self.product_identifier,
            purchase_date: self.purchase_date,
            expires_date: self.expires_date,
        }
    }
}

impl RevenueCatClient {
    pub fn new(config: RevenueCatConfig, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            clock,
        }
    }

    fn subscriber_url(&self) -> String {
        format!(
            "{}/v1/subscribers/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.app_user_id
        )
    }
}

#[async_trait]
impl EntitlementsPort for RevenueCatClient {
    async fn current_record(&self) -> Result<EntitlementRecord, EntitlementsError> {
        let response = self
            .http
            .get(self.subscriber_url())
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| EntitlementsError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EntitlementsError::UnexpectedStatus(status.as_u16()));
        }

        let body: SubscriberResponse = response
            .json()
            .await
            .map_err(|e| EntitlementsError::Malformed(e.to_string()))?;

        let now_ms = self.clock.now_ms();
        let active: HashMap<String, Entitlement> = body
            .subscriber
            .entitlements
            .into_iter()
            .filter(|(_, entitlement)| entitlement.is_active_at(now_ms))
            .map(|(id, entitlement)| (id, entitlement.into_domain()))
            .collect();

        debug!(active = active.len(), "Fetched entitlement record");
        Ok(EntitlementRecord::from_active(active))
    }
}
