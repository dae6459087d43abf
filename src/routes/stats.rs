use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::models::CityCount;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: Vec<CityCount>,
}

/// Aggregate search statistics: searches per city, most searched first
pub async fn search_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state.store.aggregate_counts().await?;
    Ok(Json(StatsResponse { stats }))
}
