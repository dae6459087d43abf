use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::clients::geocoding::GeocodingClient;
use crate::constants::{HOURLY_WINDOW, SEARCH_GEOCODE_RESULTS};
use crate::error::Result;

/// Weather data returned for a successful search
///
/// `current` is passed through as the provider sent it; `hourly` is the
/// provider's series truncated to the first 24 entries.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub current: serde_json::Value,
    pub hourly: HourlyWindow,
}

/// First 24 hourly entries, as three parallel arrays
#[derive(Debug, Clone, Serialize)]
pub struct HourlyWindow {
    pub time: Vec<String>,
    pub temperature: Vec<f64>,
    pub weather_code: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: serde_json::Value,
    hourly: HourlySeries,
}

/// Hourly series exactly as the forecast provider names it
#[derive(Debug, Deserialize)]
struct HourlySeries {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weather_code: Vec<i64>,
}

impl HourlySeries {
    /// Keep the first 24 entries of each array; shorter series pass through
    fn into_window(self) -> HourlyWindow {
        let mut window = HourlyWindow {
            time: self.time,
            temperature: self.temperature_2m,
            weather_code: self.weather_code,
        };
        window.time.truncate(HOURLY_WINDOW);
        window.temperature.truncate(HOURLY_WINDOW);
        window.weather_code.truncate(HOURLY_WINDOW);
        window
    }
}

/// Client resolving a city name to its current weather and hourly forecast
///
/// Two strictly sequential calls: geocode the name, then fetch the forecast
/// for the resolved coordinates. No retries; failures surface as
/// `AppError::Upstream`.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    geocoding: GeocodingClient,
    forecast_base_url: String,
}

impl WeatherClient {
    pub fn new(
        http: Client,
        geocoding: GeocodingClient,
        forecast_base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            geocoding,
            forecast_base_url: forecast_base_url.into(),
        }
    }

    /// Fetch weather for a city; `None` means the name resolved to no place
    pub async fn fetch(&self, city: &str) -> Result<Option<WeatherReport>> {
        let places = self.geocoding.search(city, SEARCH_GEOCODE_RESULTS).await?;
        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let forecast = self.fetch_forecast(place.latitude, place.longitude).await?;

        Ok(Some(WeatherReport {
            city: place.name.clone(),
            country: place.country_or_empty(),
            current: forecast.current,
            hourly: forecast.hourly.into_window(),
        }))
    }

    async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse> {
        let url = format!("{}/forecast", self.forecast_base_url);
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code",
                ),
                ("hourly", "temperature_2m,weather_code"),
                ("timezone", "auto"),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(len: usize) -> HourlySeries {
        HourlySeries {
            time: (0..len).map(|i| format!("2026-01-01T{:02}:00", i % 24)).collect(),
            temperature_2m: (0..len).map(|i| i as f64).collect(),
            weather_code: (0..len).map(|i| (i % 4) as i64).collect(),
        }
    }

    #[test]
    fn test_window_truncates_long_series() {
        let window = series(48).into_window();
        assert_eq!(window.time.len(), 24);
        assert_eq!(window.temperature.len(), 24);
        assert_eq!(window.weather_code.len(), 24);
        // Truncation keeps the start of the series
        assert_eq!(window.temperature[0], 0.0);
        assert_eq!(window.temperature[23], 23.0);
    }

    #[test]
    fn test_window_passes_short_series_through() {
        let window = series(10).into_window();
        assert_eq!(window.time.len(), 10);
        assert_eq!(window.temperature.len(), 10);
        assert_eq!(window.weather_code.len(), 10);
    }

    #[test]
    fn test_report_serializes_to_original_shape() {
        let report = WeatherReport {
            city: "London".to_string(),
            country: "United Kingdom".to_string(),
            current: serde_json::json!({"temperature_2m": 11.3}),
            hourly: series(2).into_window(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["city"], "London");
        assert_eq!(value["country"], "United Kingdom");
        assert_eq!(value["current"]["temperature_2m"], 11.3);
        assert!(value["hourly"]["time"].is_array());
        assert!(value["hourly"]["temperature"].is_array());
        assert!(value["hourly"]["weather_code"].is_array());
    }
}
