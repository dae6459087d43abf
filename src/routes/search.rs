use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::constants::{ERR_CITY_REQUIRED, USER_ID_COOKIE};
use crate::error::{AppError, Result};
use crate::session;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub city: String,
}

/// Search weather for a city
///
/// Resolves the visitor identifier, performs the geocode + forecast lookup,
/// and appends a history row only when the lookup succeeded. Both cookies
/// are (re)issued on the success response.
pub async fn search_weather(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SearchForm>,
) -> Result<Response> {
    if form.city.trim().is_empty() {
        return Err(AppError::InvalidInput(ERR_CITY_REQUIRED.to_string()));
    }

    let user_id =
        session::resolve_visitor_id(session::cookie_value(&headers, USER_ID_COOKIE));

    let report = state
        .weather
        .fetch(&form.city)
        .await?
        .ok_or(AppError::CityNotFound)?;

    let event = state.store.record(&form.city, &user_id).await?;
    tracing::info!("Recorded search #{} for city {:?}", event.id, event.city);

    let mut response = Json(report).into_response();
    append_cookie(&mut response, session::last_city_cookie(&form.city));
    append_cookie(&mut response, session::visitor_cookie(&user_id));

    Ok(response)
}

fn append_cookie(response: &mut Response, cookie: String) {
    // Cookie values are percent-encoded, so this parse cannot fail in practice
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}
