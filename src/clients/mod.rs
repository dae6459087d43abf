pub mod geocoding;
pub mod weather;

pub use geocoding::{GeocodingClient, Suggestion};
pub use weather::{WeatherClient, WeatherReport};

use std::time::Duration;

/// Request timeout for upstream provider calls
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Build the shared HTTP client used for all upstream calls
///
/// A bounded timeout keeps a hung provider from hanging request handling
/// indefinitely.
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}
