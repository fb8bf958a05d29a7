use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{WeatherError, provider::truncate_body};

use super::{PhotoProvider, REQUEST_TIMEOUT};

pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

#[derive(Debug, Clone)]
pub struct UnsplashProvider {
    access_key: Option<String>,
    base_url: String,
    http: Client,
}

impl UnsplashProvider {
    pub fn new(access_key: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            access_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct UsSearchResponse {
    results: Vec<UsPhoto>,
}

#[derive(Debug, Deserialize)]
struct UsPhoto {
    urls: UsUrls,
}

#[derive(Debug, Deserialize)]
struct UsUrls {
    small: String,
}

#[async_trait]
impl PhotoProvider for UnsplashProvider {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, count: u32) -> Result<Vec<String>, WeatherError> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or_else(|| WeatherError::transport("no API key configured for unsplash"))?;

        let url = format!("{}/search/photos", self.base_url);
        debug!("Searching photos");

        let res = self
            .http
            .get(&url)
            .query(&[("query", query.to_string()), ("per_page", count.to_string())])
            .header(reqwest::header::AUTHORIZATION, format!("Client-ID {access_key}"))
            .send()
            .await
            .map_err(|e| {
                WeatherError::transport(format!("failed to send request to Unsplash: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            WeatherError::transport(format!("failed to read Unsplash response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(WeatherError::NotFound(format!(
                "Unsplash search failed with status {status}: {}",
                truncate_body(&body)
            )));
        }

        let parsed: UsSearchResponse = serde_json::from_str(&body).map_err(|e| {
            WeatherError::transport(format!("failed to parse Unsplash search JSON: {e}"))
        })?;

        Ok(parsed
            .results
            .into_iter()
            .take(count as usize)
            .map(|photo| photo.urls.small)
            .collect())
    }
}
