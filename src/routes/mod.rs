pub mod autocomplete;
pub mod health;
pub mod home;
pub mod search;
pub mod stats;

pub use autocomplete::autocomplete_cities;
pub use health::health_check;
pub use home::home;
pub use search::search_weather;
pub use stats::search_stats;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/search", post(search_weather))
        .route("/cities/autocomplete", get(autocomplete_cities))
        .route("/stats", get(search_stats))
        .route("/health", get(health_check))
        .with_state(state)
}
