use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntitlementsError {
    /// The client was queried before it was configured with a platform
    /// credential. Treated the same as any other query failure: the caller
    /// stays fail-closed.
    #[error("entitlement client not configured for this platform")]
    NotConfigured,

    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}
