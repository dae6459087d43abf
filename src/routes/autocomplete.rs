use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::clients::Suggestion;
use crate::error::Result;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    pub q: String,
}

/// City-name autocomplete
///
/// Always responds 200 with a JSON array; short queries and unknown names
/// both yield an empty list.
pub async fn autocomplete_cities(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Result<Json<Vec<Suggestion>>> {
    let suggestions = state.geocoding.suggest(&params.q).await?;
    Ok(Json(suggestions))
}
