use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{WeatherError, model::ProviderWeather, provider::truncate_body};

use super::{REQUEST_TIMEOUT, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        })
    }

    /// Point the client at another host, e.g. a proxy or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn api_key(&self) -> Result<&str, WeatherError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| WeatherError::transport("no API key configured for openweather"))
    }

    async fn fetch_current(&self, location: &[(&str, String)]) -> Result<String, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let api_key = self.api_key()?;

        let res = self
            .http
            .get(&url)
            .query(location)
            .query(&[("units", "metric"), ("appid", api_key)])
            .send()
            .await
            .map_err(|e| {
                WeatherError::transport(format!("failed to send request to OpenWeather: {e}"))
            })?;

        read_body(res).await
    }
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwNameOnly {
    name: String,
}

/// Read the body, turning non-success statuses into `NotFound`.
async fn read_body(res: Response) -> Result<String, WeatherError> {
    let status = res.status();
    let body = res.text().await.map_err(|e| {
        WeatherError::transport(format!("failed to read OpenWeather response body: {e}"))
    })?;

    if !status.is_success() {
        debug!(%status, body = %truncate_body(&body), "OpenWeather rejected request");
        let message = serde_json::from_str::<OwErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        return Err(WeatherError::not_found(message));
    }

    Ok(body)
}

pub(crate) fn parse_current(body: &str) -> Result<ProviderWeather, WeatherError> {
    let parsed: ProviderWeather = serde_json::from_str(body).map_err(|e| {
        WeatherError::transport(format!("failed to parse OpenWeather current JSON: {e}"))
    })?;

    if parsed.weather.is_empty() {
        return Err(WeatherError::transport("OpenWeather response contained no conditions"));
    }

    Ok(parsed)
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn current_by_name(&self, city: &str) -> Result<ProviderWeather, WeatherError> {
        debug!("Fetching current weather by name");
        let body = self.fetch_current(&[("q", city.to_string())]).await?;
        parse_current(&body)
    }

    #[instrument(skip(self))]
    async fn place_name_at(&self, lat: f64, lon: f64) -> Result<String, WeatherError> {
        debug!("Fetching place name by coordinates");
        let body = self
            .fetch_current(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            .await?;

        let parsed: OwNameOnly = serde_json::from_str(&body).map_err(|e| {
            WeatherError::transport(format!("failed to parse OpenWeather reverse JSON: {e}"))
        })?;

        Ok(parsed.name)
    }
}
