//! Entitlement record model
//!
//! An [`EntitlementRecord`] is a snapshot of the signed-in user's purchase
//! state at query time, as reported by the entitlement provider. It holds
//! only entitlements that are *currently active*; an entitlement that has
//! lapsed or was never purchased is simply absent. The record is immutable
//! once returned; a new query produces a new independent snapshot.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptor for one active entitlement held by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Store product that granted this entitlement
    pub product_identifier: String,
    /// When the granting purchase was made
    pub purchase_date: DateTime<Utc>,
    /// When the entitlement lapses; `None` for lifetime grants
    pub expires_date: Option<DateTime<Utc>>,
}

/// Snapshot of the user's currently active entitlements, keyed by
/// entitlement identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementRecord {
    active: HashMap<String, Entitlement>,
}

impl EntitlementRecord {
    /// Snapshot with no active entitlements (the "not subscribed" record)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a record from already-filtered active entitlements
    pub fn from_active(active: HashMap<String, Entitlement>) -> Self {
        Self { active }
    }

    /// Whether the given entitlement is currently active.
    ///
    /// Absence of the key means "not active" — there is no distinction
    /// between "never purchased" and "expired" at this level.
    pub fn is_active(&self, entitlement_id: &str) -> bool {
        self.active.contains_key(entitlement_id)
    }

    /// Look up the descriptor for an active entitlement
    pub fn get(&self, entitlement_id: &str) -> Option<&Entitlement> {
        self.active.get(entitlement_id)
    }

    /// Number of active entitlements in this snapshot
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether the user holds no active entitlements at all
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
