//! Application state for the Review Cycle Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::ReviewCycleService;

/// Shared application state.
///
/// Holds the review cycle service. The service itself keeps no per-request
/// state, so sharing it across handlers is safe.
#[derive(Clone)]
pub struct AppState {
    service: Arc<ReviewCycleService>,
}

impl AppState {
    /// Creates a new application state around the given service.
    pub fn new(service: ReviewCycleService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the review cycle service.
    pub fn service(&self) -> &ReviewCycleService {
        &self.service
    }
}
