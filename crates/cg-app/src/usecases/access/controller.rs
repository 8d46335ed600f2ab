//! Access state owner
//!
//! [`AccessController`] owns the single access-state slot and every
//! transition into it: entitlement resolutions, the debug override, and the
//! mount/unmount lifecycle of the gated screen. Runtime concerns only — the
//! pure state machine lives in `cg_core::access::state`.
//!
//! Writes are last-write-wins and unguarded: an override landing while a
//! query is in flight does not cancel the query, and the query's eventual
//! resolution overwrites the override if it lands later. The only writes
//! that are ever rejected are resolutions carrying a stale
//! [`ActivationToken`], which protects the slot from a query that settles
//! after the screen unmounted or after a newer activation superseded it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use cg_core::access::AccessState;

/// Opaque handle tying an in-flight entitlement resolution to the
/// activation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationToken {
    epoch: u64,
}

struct Inner {
    /// Bumped on every activate/deactivate; resolutions from older epochs
    /// are stale and must not land.
    epoch: u64,
    /// Whether the gated screen is currently mounted
    mounted: bool,
}

/// Owner of the access state and its transitions.
///
/// The state is published through a watch channel so the presentation layer
/// can render as a pure function of the latest value. All mutators are
/// synchronous; the entitlement query itself runs elsewhere and reports back
/// through [`AccessController::complete_resolution`].
pub struct AccessController {
    inner: Mutex<Inner>,
    state: watch::Sender<AccessState>,
}

impl AccessController {
    /// Create a controller in the fail-closed default state.
    pub fn new() -> Self {
        let (state, _rx) = watch::channel(AccessState::Locked);
        Self {
            inner: Mutex::new(Inner {
                epoch: 0,
                mounted: false,
            }),
            state,
        }
    }

    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mount the gate.
    ///
    /// Resets the state to `Locked` so the pending window of the new query
    /// renders fail-closed, invalidates any token from a previous
    /// activation, and returns the token for the new one.
    pub fn activate(&self) -> ActivationToken {
        let mut inner = self.lock_inner();
        inner.mounted = true;
        inner.epoch += 1;
        self.state.send_replace(AccessState::Locked);
        ActivationToken { epoch: inner.epoch }
    }

    /// Unmount the gate.
    ///
    /// Outstanding tokens become stale; a query that resolves after this
    /// call produces no state mutation.
    pub fn deactivate(&self) {
        let mut inner = self.lock_inner();
        inner.mounted = false;
        inner.epoch += 1;
    }

    /// Apply a resolved entitlement check.
    ///
    /// Returns whether the value was applied. A resolution is discarded when
    /// its token no longer matches the current epoch (the gate deactivated
    /// or re-activated in the meantime).
    pub fn complete_resolution(&self, token: ActivationToken, entitled: bool) -> bool {
        let inner = self.lock_inner();
        if !inner.mounted || inner.epoch != token.epoch {
            return false;
        }
        self.state.send_replace(AccessState::from_entitlement(entitled));
        true
    }

    /// Force the access state by hand, regardless of any in-flight query.
    ///
    /// Does not invalidate outstanding tokens: a query that resolves later
    /// still lands and overwrites this value (last write wins).
    #[cfg(feature = "debug-override")]
    pub fn set_override(&self, unlocked: bool) {
        // Hold the lock so the write is ordered against resolutions.
        let _inner = self.lock_inner();
        let next = if unlocked {
            AccessState::Unlocked
        } else {
            AccessState::Locked
        };
        self.state.send_replace(next);
    }

    /// Flip the access state by hand. Returns the state after the flip.
    #[cfg(feature = "debug-override")]
    pub fn toggle_override(&self) -> AccessState {
        let _inner = self.lock_inner();
        self.state.send_modify(|state| *state = state.toggled());
        *self.state.borrow()
    }

    /// Current access state.
    pub fn state(&self) -> AccessState {
        *self.state.borrow()
    }

    /// Whether the gated content is currently visible.
    pub fn unlocked(&self) -> bool {
        self.state().is_unlocked()
    }

    /// Subscribe to state changes (presentation contract).
    pub fn subscribe(&self) -> watch::Receiver<AccessState> {
        self.state.subscribe()
    }
}

impl Default for AccessController {
    fn default() -> Self {
        Self::new()
    }
}
