use serde::{Deserialize, Serialize};

/// Content access state machine
///
/// Design principle: This is a pure type state machine with only state
/// definitions and transition helpers. Runtime behaviors like the
/// entitlement query and stale-result discarding are handled by the
/// application layer (cg-app).
///
/// State transitions:
///
/// ```text
/// Locked ⇄ Unlocked
/// ```
///
/// Both directions are taken either by a resolved entitlement query or by
/// the debug override. There is no dedicated "pending" state: while a query
/// is outstanding the state stays `Locked`, so an unresolved (or failed)
/// query renders exactly like "not subscribed". No transition is guarded;
/// whichever write lands last wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    /// Gated content is obscured; the user is not proven entitled
    Locked,

    /// Gated content is fully visible
    Unlocked,
}

impl AccessState {
    /// Map a resolved entitlement check to a state
    pub fn from_entitlement(active: bool) -> Self {
        if active {
            Self::Unlocked
        } else {
            Self::Locked
        }
    }

    /// Check if content is visible
    pub fn is_unlocked(self) -> bool {
        self == Self::Unlocked
    }

    /// Check if content is obscured
    pub fn is_locked(self) -> bool {
        self == Self::Locked
    }

    /// Flip to the other state (debug override)
    pub fn toggled(self) -> Self {
        match self {
            Self::Locked => Self::Unlocked,
            Self::Unlocked => Self::Locked,
        }
    }
}

impl Default for AccessState {
    fn default() -> Self {
        Self::Locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_locked() {
        let state = AccessState::default();
        assert_eq!(state, AccessState::Locked);
        assert!(state.is_locked());
        assert!(!state.is_unlocked());
    }

    #[test]
    fn test_from_entitlement() {
        assert_eq!(AccessState::from_entitlement(true), AccessState::Unlocked);
        assert_eq!(AccessState::from_entitlement(false), AccessState::Locked);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(AccessState::Locked.toggled(), AccessState::Unlocked);
        assert_eq!(AccessState::Unlocked.toggled(), AccessState::Locked);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for state in [AccessState::Locked, AccessState::Unlocked] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }
}
