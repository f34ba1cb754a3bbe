//! OpenWeather current-weather client
//!
//! One GET per call. Non-2xx statuses and non-JSON bodies are handed back as
//! payloads rather than errors; only transport failures are errors.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Raw provider response, passed through to the narrator as text context
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPayload {
    pub status: u16,
    pub body: Value,
}

impl WeatherPayload {
    #[cfg(test)]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Parse a response body, keeping it verbatim when it is not JSON
    pub fn from_body(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()));
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body rendered for inclusion in a prompt
    pub fn as_context(&self) -> String {
        match &self.body {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather request failed: {0}")]
    Request(String),
    #[error("Failed to read weather response: {0}")]
    Body(String),
}

/// Weather-provider connection settings
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
}

impl WeatherConfig {
    /// `None` when `OPENWEATHER_API_KEY` is missing or blank
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        let base_url =
            std::env::var("OPENWEATHER_URL").unwrap_or_else(|_| DEFAULT_WEATHER_URL.to_string());
        Some(Self { api_key, base_url })
    }
}

/// Source of current weather for a place
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_weather(
        &self,
        location: &str,
        country: Option<&str>,
        language_code: Option<&str>,
    ) -> Result<WeatherPayload, WeatherError>;
}

/// Value of the `q` parameter: `location,country`, or just `location`
pub fn location_query(location: &str, country: Option<&str>) -> String {
    match country.map(str::trim).filter(|c| !c.is_empty()) {
        Some(country) => format!("{location},{country}"),
        None => location.to_string(),
    }
}

/// Query parameters for one request, `lang` only when a code is known
pub fn build_query(
    location: &str,
    country: Option<&str>,
    language_code: Option<&str>,
    api_key: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", location_query(location, country)),
        ("units", "metric".to_string()),
    ];
    if let Some(code) = language_code.filter(|c| !c.is_empty()) {
        params.push(("lang", code.to_string()));
    }
    params.push(("APPID", api_key.to_string()));
    params
}

#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_weather(
        &self,
        location: &str,
        country: Option<&str>,
        language_code: Option<&str>,
    ) -> Result<WeatherPayload, WeatherError> {
        let params = build_query(location, country, language_code, &self.config.api_key);

        tracing::info!(
            q = %location_query(location, country),
            lang = language_code.unwrap_or("-"),
            "Fetching current weather"
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| WeatherError::Body(e.to_string()))?;

        let payload = WeatherPayload::from_body(status, &text);
        if !payload.is_success() {
            tracing::warn!(status, "Weather provider returned an error status");
        }
        Ok(payload)
    }
}
