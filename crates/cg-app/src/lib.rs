//! CatGate Application Orchestration Layer
//!
//! This crate contains business logic use cases and the access-gate state
//! owner. Infrastructure (HTTP client, config loading) lives in cg-infra;
//! the UI shell talks to this crate only through [`UseCases`] and the
//! state subscription on [`usecases::access::AccessController`].

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::UseCases;

use std::sync::Arc;

use usecases::access::AccessController;

/// Application facade.
///
/// Owns the [`AccessController`] (the single access-state slot shared by
/// every command the UI issues) and hands out use cases with their
/// dependencies pre-wired.
pub struct App {
    deps: AppDeps,
    controller: Arc<AccessController>,
}

impl App {
    /// Create the application from its dependency grouping.
    pub fn new(deps: AppDeps) -> Self {
        Self {
            deps,
            controller: Arc::new(AccessController::new()),
        }
    }

    /// Shared access-state owner.
    pub fn controller(&self) -> Arc<AccessController> {
        Arc::clone(&self.controller)
    }

    /// Accessor for pre-wired use cases.
    pub fn usecases(&self) -> UseCases {
        UseCases::new(Arc::clone(&self.controller), Arc::clone(&self.deps.entitlements))
    }
}
