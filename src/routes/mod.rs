// Route exports
pub mod auth;
pub mod client;
pub mod error;
pub mod partners;
pub mod profiles;
pub mod site;

use actix_web::web;

use crate::config::{DemoSettings, Settings};
use crate::core::PartnerSearch;
use crate::services::{ClientStorage, DemoDataService, SessionGate};

pub use client::ClientId;
pub use error::{json_config, path_config, query_config, ApiError};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub demo: DemoDataService,
    pub gate: SessionGate,
    pub search: PartnerSearch,
    pub delays: DemoSettings,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        let storage = ClientStorage::new(
            settings.storage.max_items,
            settings.storage.idle_timeout_secs,
        );

        Self {
            demo: DemoDataService::new(),
            gate: SessionGate::new(storage),
            search: PartnerSearch::new(settings.search.page_size),
            delays: settings.demo.clone(),
        }
    }

    /// State with default limits and no artificial latency
    pub fn instant() -> Self {
        let settings = Settings {
            demo: DemoSettings::instant(),
            ..Default::default()
        };
        Self::from_settings(&settings)
    }
}

/// Sleep for a simulated backend latency
pub(crate) async fn simulate_latency(delay: std::time::Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config())
            .configure(site::configure)
            .configure(auth::configure)
            .configure(partners::configure)
            .configure(profiles::configure),
    );
}
