use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::constants::{AUTOCOMPLETE_MAX_RESULTS, AUTOCOMPLETE_MIN_QUERY_LEN};
use crate::error::Result;

/// A place resolved by the geocoding provider
#[derive(Debug, Clone, Deserialize)]
pub struct GeoPlace {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPlace {
    /// Country name, or an empty string when the provider omits it
    pub fn country_or_empty(&self) -> String {
        self.country.clone().unwrap_or_default()
    }
}

/// Autocomplete suggestion returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Absent entirely when the provider has no matches
    results: Option<Vec<GeoPlace>>,
}

/// Client for the geocoding provider (name -> coordinates)
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: Client,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Look up places matching `name`, at most `count` results
    pub async fn search(&self, name: &str, count: u32) -> Result<Vec<GeoPlace>> {
        let url = format!("{}/search", self.base_url);
        let count = count.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("name", name), ("count", count.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: GeocodingResponse = response.json().await?;
        Ok(body.results.unwrap_or_default())
    }

    /// Autocomplete suggestions for a partial city name
    ///
    /// Queries shorter than two characters return an empty list without
    /// touching the network, so partial typing does not spam the provider.
    pub async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>> {
        if query.chars().count() < AUTOCOMPLETE_MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let places = self.search(query, AUTOCOMPLETE_MAX_RESULTS).await?;

        Ok(places
            .into_iter()
            .map(|place| Suggestion {
                name: format!("{}, {}", place.name, place.country_or_empty()),
                latitude: place.latitude,
                longitude: place.longitude,
            })
            .collect())
    }
}
