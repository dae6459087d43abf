//! Weather Lookup Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;

pub use config::Config;
pub use db::{create_pool, SearchStore};
pub use error::{AppError, Result};

use clients::{GeocodingClient, WeatherClient};

/// Application state shared across all handlers
///
/// Cheap to clone: the pool and HTTP client are handle types.
#[derive(Clone)]
pub struct AppState {
    pub store: SearchStore,
    pub geocoding: GeocodingClient,
    pub weather: WeatherClient,
    pub config: Config,
}

impl AppState {
    /// Wire up the store and upstream clients from configuration
    pub fn new(pool: sqlx::SqlitePool, config: Config) -> Result<Self> {
        let http = clients::http_client()?;
        let geocoding = GeocodingClient::new(http.clone(), config.geocoding_base_url.clone());
        let weather = WeatherClient::new(
            http,
            geocoding.clone(),
            config.forecast_base_url.clone(),
        );

        Ok(Self {
            store: SearchStore::new(pool),
            geocoding,
            weather,
            config,
        })
    }
}
