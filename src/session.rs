//! Visitor identity and cookie policy
//!
//! A visitor is identified by an opaque random token handed out as a
//! long-lived cookie. The token is advisory client-side state: the server
//! never validates it and a forged token is treated like a real one. Its
//! only job is grouping search history rows.

use axum::http::{header, HeaderMap};
use rand::Rng;

use crate::constants::{
    LAST_CITY_COOKIE, LAST_CITY_MAX_AGE_SECS, USER_ID_COOKIE, USER_ID_MAX_AGE_SECS,
};

/// Read a cookie value from the request headers, percent-decoded
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        let Ok(raw) = header_value.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            if key == name {
                return match urlencoding::decode(value) {
                    Ok(decoded) => Some(decoded.into_owned()),
                    Err(_) => Some(value.to_string()),
                };
            }
        }
    }
    None
}

/// Resolve the visitor identifier for this request
///
/// Reuses the identifier the browser sent; first-time visitors get a fresh
/// 128-bit random token as a 32-character hex string.
pub fn resolve_visitor_id(existing: Option<String>) -> String {
    match existing {
        Some(id) if !id.is_empty() => id,
        _ => generate_visitor_id(),
    }
}

/// Generate a new cryptographically random visitor token
pub fn generate_visitor_id() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    hex::encode(bytes)
}

/// `Set-Cookie` value for the visitor identifier (1 year)
pub fn visitor_cookie(user_id: &str) -> String {
    set_cookie(USER_ID_COOKIE, user_id, USER_ID_MAX_AGE_SECS)
}

/// `Set-Cookie` value for the most recently searched city (30 days)
pub fn last_city_cookie(city: &str) -> String {
    set_cookie(LAST_CITY_COOKIE, city, LAST_CITY_MAX_AGE_SECS)
}

/// Build a `Set-Cookie` header value
///
/// The value is percent-encoded so spaces and non-ASCII city names survive
/// the header grammar.
fn set_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/",
        name,
        urlencoding::encode(value),
        max_age_secs
    )
}
