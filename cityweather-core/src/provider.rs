use crate::{
    Config, WeatherError,
    model::ProviderWeather,
    provider::{openweather::OpenWeatherProvider, unsplash::UnsplashProvider},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug, time::Duration};

pub mod openweather;
pub mod unsplash;

pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
    Unsplash,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweather",
            ProviderId::Unsplash => "unsplash",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeather, ProviderId::Unsplash]
    }

    /// Environment variable that overrides the configured key.
    pub fn env_var(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "OPENWEATHER_API_KEY",
            ProviderId::Unsplash => "UNSPLASH_ACCESS_KEY",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "openweather" => Ok(ProviderId::OpenWeather),
            "unsplash" => Ok(ProviderId::Unsplash),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: openweather, unsplash."
            )),
        }
    }
}

/// Source of current-weather payloads, by city name or by coordinates.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_by_name(&self, city: &str) -> Result<ProviderWeather, WeatherError>;

    /// Canonical place name of the current-weather answer for a position.
    async fn place_name_at(&self, lat: f64, lon: f64) -> Result<String, WeatherError>;
}

/// Source of photo URLs for a free-text query.
#[async_trait]
pub trait PhotoProvider: Send + Sync + Debug {
    async fn search(&self, query: &str, count: u32) -> Result<Vec<String>, WeatherError>;
}

/// Build the weather provider from config. A missing key is not an error here;
/// calls made without one fail individually.
pub fn weather_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = ProviderId::OpenWeather;
    let api_key = config.provider_api_key(id).map(str::to_owned);
    let mut provider = OpenWeatherProvider::new(api_key)?;
    if let Some(url) = config.provider_base_url(id) {
        provider = provider.with_base_url(url);
    }
    Ok(Box::new(provider))
}

/// Build the photo provider from config, same credential rules as the weather one.
pub fn photo_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn PhotoProvider>> {
    let id = ProviderId::Unsplash;
    let api_key = config.provider_api_key(id).map(str::to_owned);
    let mut provider = UnsplashProvider::new(api_key)?;
    if let Some(url) = config.provider_base_url(id) {
        provider = provider.with_base_url(url);
    }
    Ok(Box::new(provider))
}

/// Keep error bodies short enough for a log line.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_parse_is_case_insensitive() {
        assert_eq!(
            ProviderId::try_from("OpenWeather").unwrap(),
            ProviderId::OpenWeather
        );
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn providers_build_without_api_keys() {
        let cfg = Config::default();
        assert!(weather_provider_from_config(&cfg).is_ok());
        assert!(photo_provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "x".repeat(500);
        let cut = truncate_body(&long);
        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }
}
