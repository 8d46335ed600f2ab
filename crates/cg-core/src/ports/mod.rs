//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

pub mod clock;
pub mod entitlements;
pub mod errors;

pub use clock::ClockPort;
pub use entitlements::EntitlementsPort;
pub use errors::EntitlementsError;
