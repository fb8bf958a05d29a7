use std::sync::Arc;

use tracing::{instrument, warn};

use crate::{WeatherError, model::LocationView, provider::WeatherProvider};

/// Label shown when a map position could not be named.
pub const FALLBACK_LOCATION_LABEL: &str = "Selected Location";

/// Names arbitrary map positions through the weather provider.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    provider: Arc<dyn WeatherProvider>,
}

impl LocationResolver {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// One reverse lookup per call; rapid calls are neither merged nor ordered.
    #[instrument(skip(self))]
    pub async fn resolve(&self, lat: f64, lon: f64) -> Result<LocationView, WeatherError> {
        let name = self.provider.place_name_at(lat, lon).await?;
        Ok(LocationView { name, lat, lon })
    }

    /// Like [`resolve`](Self::resolve) but never fails: errors become the fallback label.
    pub async fn resolve_label(&self, lat: f64, lon: f64) -> String {
        label_or_fallback(&self.resolve(lat, lon).await).to_string()
    }
}

pub fn label_or_fallback(result: &Result<LocationView, WeatherError>) -> &str {
    match result {
        Ok(view) if !view.name.is_empty() => &view.name,
        Ok(_) => FALLBACK_LOCATION_LABEL,
        Err(err) => {
            warn!(error = %err, "reverse lookup failed, using fallback label");
            FALLBACK_LOCATION_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProviderWeather;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct FixedName(Result<String, WeatherError>);

    #[async_trait]
    impl WeatherProvider for FixedName {
        async fn current_by_name(&self, _city: &str) -> Result<ProviderWeather, WeatherError> {
            unreachable!("not used by reverse lookup")
        }

        async fn place_name_at(&self, _lat: f64, _lon: f64) -> Result<String, WeatherError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn resolve_pairs_name_with_input_coordinates() {
        let resolver = LocationResolver::new(Arc::new(FixedName(Ok("London".into()))));
        let view = resolver.resolve(51.5, -0.12).await.expect("resolves");
        assert_eq!(
            view,
            LocationView {
                name: "London".into(),
                lat: 51.5,
                lon: -0.12,
            }
        );
    }

    #[tokio::test]
    async fn failure_uses_fallback_label() {
        let resolver = LocationResolver::new(Arc::new(FixedName(Err(WeatherError::transport(
            "connection reset",
        )))));
        assert!(resolver.resolve(51.5, -0.12).await.is_err());
        assert_eq!(resolver.resolve_label(51.5, -0.12).await, FALLBACK_LOCATION_LABEL);
    }

    #[tokio::test]
    async fn empty_name_uses_fallback_label() {
        // Open ocean answers with an empty name.
        let resolver = LocationResolver::new(Arc::new(FixedName(Ok(String::new()))));
        assert_eq!(resolver.resolve_label(0.0, -30.0).await, "Selected Location");
    }
}
