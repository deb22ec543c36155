//! TennisConnect - partner-matching service for tennis players
//!
//! This library hosts the demo profile store, the credential check, the
//! session gate over per-client storage and the partner filter engine,
//! plus the actix-web routes that expose them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{FilterSet, PartnerSearch, SearchResult};
pub use models::{CurrentUser, UserProfile};
pub use routes::{configure_routes, AppState};
pub use services::{ClientStorage, DemoDataService, SessionGate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let store = DemoDataService::new();
        let result = PartnerSearch::default().apply(store.profiles().to_vec(), &FilterSet::default());
        assert_eq!(result.partners.len(), 3);
    }
}
